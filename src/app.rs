mod contact;
mod experience;
mod hero;
mod hobbies;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use experience::ExperienceSection;
use hero::Hero;
use hobbies::HobbiesSection;
use projects::ProjectsSection;
use reveal::Reveal;
use skills::SkillsSection;

use crate::content::PERSONAL_INFO;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-950 text-dark-50 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=move |title| format!("{} - {title}", PERSONAL_INFO.name) />

        <Router>
            <main class="mx-auto w-full max-w-6xl px-6 md:px-10">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole site is one page; every section below the hero fades in the
/// first time it scrolls into view.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Reveal>
            <ExperienceSection />
        </Reveal>
        <Reveal>
            <ProjectsSection />
        </Reveal>
        <Reveal>
            <SkillsSection />
        </Reveal>
        <Reveal>
            <HobbiesSection />
        </Reveal>
        <Reveal>
            <ContactSection />
        </Reveal>
        <footer class="py-8 text-center text-sm text-dark-100">
            "Built with Rust & Leptos · last deployed " {&env!("BUILD_TIME")[..10]}
        </footer>
    }
}
