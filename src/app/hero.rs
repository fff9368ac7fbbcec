use leptos::prelude::*;

use crate::content::PERSONAL_INFO;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center py-20">
            <div class="grid md:grid-cols-2 gap-12 items-center w-full">
                <div class="reveal reveal-shown">
                    <span class="text-primary font-mono mb-4 block text-lg text-glow">
                        "Hello, I'm"
                    </span>
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 tracking-tight leading-tight">
                        {PERSONAL_INFO.name}
                    </h1>
                    <h2 class="text-2xl md:text-3xl text-dark-50 font-medium mb-6">
                        {PERSONAL_INFO.role}
                    </h2>
                    <p class="text-lg text-dark-50 mb-8 max-w-lg leading-relaxed">
                        {PERSONAL_INFO.bio}
                    </p>
                    <div class="flex gap-4">
                        <a
                            href="#contact"
                            class="px-8 py-3 bg-primary text-white rounded-lg hover:bg-opacity-90 transition-all font-medium"
                        >
                            "Get in Touch"
                        </a>
                        <a
                            href="#projects"
                            class="px-8 py-3 border border-dark-800 text-white rounded-lg hover:bg-dark-800 transition-all font-medium"
                        >
                            "View Work"
                        </a>
                    </div>
                </div>
                <div class="relative flex justify-center">
                    <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-3/4 h-3/4 bg-primary opacity-20 blur-[100px] rounded-full pointer-events-none"></div>
                    <img
                        src=PERSONAL_INFO.avatar
                        alt=PERSONAL_INFO.name
                        class="relative z-10 w-full max-w-md drop-shadow-2xl hero-float"
                    />
                </div>
            </div>
        </section>
    }
}
