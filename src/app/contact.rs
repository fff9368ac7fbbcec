use leptos::prelude::*;

use crate::content::CONTACT_INFO;

#[component]
pub fn ContactSection() -> impl IntoView {
    let whatsapp = format!(
        "https://wa.me/{}",
        CONTACT_INFO.phone.trim_start_matches('+')
    );

    view! {
        <section id="contact" class="py-20 mb-20">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold text-white mb-8">"Get In Touch"</h2>
                <p class="text-lg text-dark-50 mb-12">
                    "I'm currently looking for new opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                </p>
                <div class="flex flex-col md:flex-row gap-6 justify-center items-center">
                    <a
                        href=format!("mailto:{}", CONTACT_INFO.email)
                        class="flex items-center gap-3 px-8 py-4 bg-primary/10 border border-primary text-primary hover:bg-primary hover:text-white rounded-lg font-medium transition-all duration-300"
                    >
                        "📧 " {CONTACT_INFO.email}
                    </a>
                    <a
                        href=CONTACT_INFO.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-3 px-8 py-4 bg-dark-800 border border-dark-800 text-white hover:border-primary/50 hover:bg-dark-900 rounded-lg font-medium transition-all duration-300"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        "LinkedIn"
                    </a>
                    <a
                        href=whatsapp
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-3 px-8 py-4 bg-dark-800 border border-dark-800 text-white hover:border-green-500/50 hover:bg-dark-900 rounded-lg font-medium transition-all duration-300"
                    >
                        "WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}
