mod modal;

use leptos::prelude::*;

use crate::content::{Project, PROJECTS};
use modal::ProjectModal;

/// The projects section owns the selection: cards write it, the overlay's
/// close callback clears it. No interaction logic lives here beyond that.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static Project>);
    let is_open = Signal::derive(move || selected.with(|s| s.is_some()));
    let on_close = Callback::new(move |()| set_selected(None));

    view! {
        <section id="projects" class="py-20">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-12 flex items-center gap-4">
                <span class="text-primary text-glow">"02."</span>
                " Featured Projects"
                <div class="h-px bg-dark-800 flex-grow ml-4"></div>
            </h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project set_selected /> })
                    .collect_view()}
            </div>
            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! { <ProjectModal project=Some(project) is_open on_close /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    set_selected: WriteSignal<Option<&'static Project>>,
) -> impl IntoView {
    view! {
        <div
            class="bg-dark-800/50 backdrop-blur-sm p-6 rounded-xl border border-dark-800 hover:border-primary transition-all duration-300 group hover:-translate-y-2 cursor-pointer"
            on:click=move |_| set_selected(Some(project))
        >
            <div class="flex flex-wrap items-center gap-2 mb-4">
                <span class="px-2.5 py-1 bg-primary/20 border border-primary/30 rounded-full text-primary text-[11px] font-mono uppercase tracking-widest leading-none">
                    {project.kind}
                </span>
                <span class="px-2.5 py-1 bg-dark-800 rounded-full text-dark-50 text-[11px] font-mono uppercase tracking-widest leading-none">
                    {project.status}
                </span>
            </div>
            <h3 class="text-xl font-bold text-white mb-2 group-hover:text-primary transition-colors">
                {project.title}
            </h3>
            <p class="text-dark-50 text-sm mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! { <span class="text-xs font-mono text-primary/80">{tech.name}</span> }
                    })
                    .collect_view()}
            </div>
            {project
                .has_detail()
                .then(|| {
                    view! {
                        <div class="mt-4 text-xs text-dark-100 group-hover:text-primary transition-colors">
                            "View details →"
                        </div>
                    }
                })}
        </div>
    }
}
