use leptos::prelude::*;

use crate::content::{ABOUT_ME, HOBBIES};

#[component]
pub fn HobbiesSection() -> impl IntoView {
    view! {
        <section id="hobbies" class="py-20 border-t border-dark-800/50">
            <div class="max-w-4xl mx-auto text-center">
                <h3 class="text-2xl md:text-3xl font-bold text-white mb-8">"Other Interests"</h3>
                <div class="flex flex-wrap justify-center gap-6 mb-10">
                    {HOBBIES
                        .iter()
                        .map(|hobby| {
                            view! {
                                <div class="flex items-center gap-2 px-6 py-3 bg-dark-800/30 rounded-full text-dark-50 hover:text-white hover:bg-dark-800 transition-all duration-300">
                                    <span class="text-primary">"♫"</span>
                                    <span>{*hobby}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-dark-50 leading-relaxed">{ABOUT_ME}</p>
            </div>
        </section>
    }
}
