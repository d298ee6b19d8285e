//! Home page

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Design That Tells Your Story"
                        </h1>
                        <p class="text-xl text-gray-300 mb-8">
                            "Atelier is an independent studio crafting brand identities, "
                            "illustration, and digital experiences."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="#contact" class="px-8 py-4 bg-white hover:bg-gray-200 text-gray-900 font-semibold rounded-lg transition">
                                "Get in Touch"
                            </a>
                            <a href="#about" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "See Our Work"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <AboutSection/>
            <ContactSection/>
        </div>
    }
}
