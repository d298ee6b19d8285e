//! About section

use leptos::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <img
                    src="/assets/illustration.svg"
                    alt="Skills"
                    width="800"
                    height="800"
                    class="object-cover mx-auto"
                />
            </div>
        </section>
    }
}
