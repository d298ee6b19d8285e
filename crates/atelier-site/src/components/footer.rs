//! Site footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div>
                        <span class="text-xl font-bold text-white">"Atelier"</span>
                        <p class="mt-2 text-sm">"Design and illustration studio."</p>
                    </div>
                    <div class="flex items-center space-x-8">
                        <a href="#about" class="hover:text-white transition">"About"</a>
                        <a href="#contact" class="hover:text-white transition">"Contact"</a>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-800 text-sm text-center">
                    "© 2026 Atelier Studio. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
