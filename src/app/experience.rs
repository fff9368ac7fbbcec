use leptos::prelude::*;

use crate::content::WORK_EXPERIENCE;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-12 flex items-center gap-4">
                <span class="text-primary text-glow">"01."</span>
                " Work Experience"
                <div class="h-px bg-dark-800 flex-grow ml-4"></div>
            </h2>
            <div class="space-y-12">
                {WORK_EXPERIENCE
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class="group relative pl-8 border-l-2 border-dark-800 hover:border-primary transition-colors duration-300">
                                <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-dark-900 border-2 border-dark-800 group-hover:border-primary transition-colors duration-300"></div>
                                <h3 class="text-2xl font-bold text-white mb-1">{exp.role}</h3>
                                <div class="text-primary font-mono mb-2 text-sm">
                                    "@ " {exp.company} <span class="text-dark-50 mx-2">"|"</span>
                                    {exp.period}
                                </div>
                                <p class="text-dark-50 mb-4">{exp.description}</p>
                                <ul class="space-y-3 text-dark-50">
                                    {exp
                                        .responsibilities
                                        .iter()
                                        .map(|resp| {
                                            view! {
                                                <li class="flex items-start gap-3">
                                                    <span class="text-primary mt-1.5">"▹"</span>
                                                    <span>{*resp}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
