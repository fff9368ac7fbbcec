use leptos::prelude::*;

use crate::content::{Technology, FUTURE_INTERESTS, SKILL_GROUPS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-12 flex items-center gap-4">
                <span class="text-primary text-glow">"03."</span>
                " Skills & Interests"
                <div class="h-px bg-dark-800 flex-grow ml-4"></div>
            </h2>
            <div class="grid md:grid-cols-2 gap-12">
                <div>
                    <h3 class="text-xl font-bold text-white mb-6">"Technical Skills"</h3>
                    <div class="space-y-6">
                        {SKILL_GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div>
                                        <h4 class="text-sm font-mono text-primary mb-2 uppercase tracking-wider">
                                            {group.category}
                                        </h4>
                                        <div class="flex flex-wrap gap-3">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| view! { <SkillChip skill={*skill} /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h3 class="text-xl font-bold text-white mb-6">"Future Tech Focus"</h3>
                    <p class="text-dark-50 mb-6 text-sm">
                        "Technologies and fields I am actively exploring and studying:"
                    </p>
                    <div class="space-y-4">
                        {FUTURE_INTERESTS
                            .iter()
                            .map(|interest| {
                                view! {
                                    <div class="flex items-center gap-3 text-dark-50 p-3 border border-dark-800 rounded-lg hover:border-primary/50 transition-colors group bg-dark-900/50">
                                        <span class="w-2 h-2 rounded-full bg-primary"></span>
                                        <span class="group-hover:text-white transition-colors">
                                            {*interest}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A skill pill that reveals its icon while hovered. Click toggles the same
/// state so the reveal works on touch screens too.
#[component]
fn SkillChip(skill: Technology) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <div
            class="relative cursor-pointer"
            on:mouseenter=move |_| set_expanded(true)
            on:mouseleave=move |_| set_expanded(false)
            on:click=move |_| set_expanded(!expanded.get_untracked())
        >
            <div class=move || {
                if expanded() {
                    "px-4 py-2 rounded-lg text-sm border border-primary bg-dark-900 text-white flex items-center gap-3 transition-all duration-300"
                } else {
                    "px-4 py-2 rounded-lg text-sm border border-dark-800 bg-dark-800 text-dark-50 flex items-center gap-3 transition-all duration-300"
                }
            }>
                {move || {
                    expanded()
                        .then(|| {
                            view! {
                                <img
                                    src=skill.icon
                                    alt=skill.name
                                    class="w-6 h-6 object-contain flex-shrink-0"
                                />
                            }
                        })
                }} <span class="whitespace-nowrap">{skill.name}</span>
            </div>
        </div>
    }
}
