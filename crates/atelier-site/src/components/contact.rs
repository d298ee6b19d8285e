//! Contact section and lead form
//!
//! Owns the form state for the whole section. Edits replace the state with
//! a new value; submission captures the state at click time, forwards it
//! through `atelier_leads`, and applies the returned state and status once
//! the request settles. The submitting flag is cleared at that single
//! point, whatever the outcome.

use atelier_leads::{FormField, FormState, SubmissionStatus, WebhookClient};
use leptos::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = create_signal(FormState::default());
    let (status, set_status) = create_signal(SubmissionStatus::Idle);
    let (submitting, set_submitting) = create_signal(false);

    let edit = move |field: FormField, value: String| {
        set_form.update(|form| *form = form.clone().with_field(field, &value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_status.set(SubmissionStatus::Idle);

        let snapshot = form.get_untracked();
        spawn_local(async move {
            let client = WebhookClient::default();
            let (next, outcome) = client.submit(snapshot).await;
            set_form.set(next);
            set_status.set(outcome);
            set_submitting.set(false);
        });
    };

    view! {
        <section id="contact" class="py-14 px-4 sm:px-6 lg:px-8">
            <div class="max-w-screen-xl mx-auto text-gray-600">
                <div class="max-w-lg mx-auto space-y-3 text-center">
                    <h3 class="text-black font-semibold">"Contact"</h3>
                    <p class="text-gray-800 text-3xl font-semibold sm:text-4xl">"Get in touch"</p>
                    <p>"We'd love to hear from you! Please fill out the form below."</p>
                </div>

                <div class="mt-12 max-w-lg mx-auto">
                    <form on:submit=on_submit class="space-y-5">
                        <div class="flex flex-col gap-y-5 gap-x-6 sm:flex-row [&>*]:w-full">
                            <div>
                                <label for="firstName" class="font-medium">"First name"</label>
                                <input
                                    id="firstName"
                                    name="firstName"
                                    type="text"
                                    required
                                    class="w-full mt-2 px-3 py-2 text-gray-500 bg-transparent outline-none border focus:border-black shadow-sm rounded-lg"
                                    on:input=move |ev| edit(FormField::FirstName, event_target_value(&ev))
                                    prop:value=move || form.get().first_name
                                />
                            </div>
                            <div>
                                <label for="lastName" class="font-medium">"Last name"</label>
                                <input
                                    id="lastName"
                                    name="lastName"
                                    type="text"
                                    required
                                    class="w-full mt-2 px-3 py-2 text-gray-500 bg-transparent outline-none border focus:border-black shadow-sm rounded-lg"
                                    on:input=move |ev| edit(FormField::LastName, event_target_value(&ev))
                                    prop:value=move || form.get().last_name
                                />
                            </div>
                        </div>

                        <div>
                            <label for="email" class="font-medium">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                class="w-full mt-2 px-3 py-2 text-gray-500 bg-transparent outline-none border focus:border-black shadow-sm rounded-lg"
                                on:input=move |ev| edit(FormField::Email, event_target_value(&ev))
                                prop:value=move || form.get().email
                            />
                        </div>

                        <div>
                            <label for="phone" class="font-medium">"Phone number"</label>
                            <div class="relative mt-2">
                                <div class="absolute inset-y-0 left-3 my-auto h-6 flex items-center border-r pr-2 z-10">
                                    <select
                                        name="countryCode"
                                        class="text-sm bg-transparent outline-none rounded-lg h-full"
                                        on:change=move |ev| edit(FormField::CountryCode, event_target_value(&ev))
                                        prop:value=move || form.get().country_code.code().to_string()
                                    >
                                        <option value="US">"US"</option>
                                        <option value="ES">"ES"</option>
                                        <option value="MR">"MR"</option>
                                    </select>
                                </div>
                                <input
                                    id="phone"
                                    name="phone"
                                    type="tel"
                                    placeholder="+1 (555) 000-000"
                                    required
                                    class="w-full pl-[4.5rem] pr-3 py-2 appearance-none bg-transparent outline-none border focus:border-black shadow-sm rounded-lg"
                                    on:input=move |ev| edit(FormField::Phone, event_target_value(&ev))
                                    prop:value=move || form.get().phone
                                />
                            </div>
                        </div>

                        <div>
                            <label for="message" class="font-medium">"Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                required
                                class="w-full mt-2 h-36 px-3 py-2 resize-none appearance-none bg-transparent outline-none border focus:border-black shadow-sm rounded-lg"
                                on:input=move |ev| edit(FormField::Message, event_target_value(&ev))
                                prop:value=move || form.get().message
                            ></textarea>
                        </div>

                        <Show when=move || status.get().is_success()>
                            <div class="p-3 rounded-lg bg-green-50 border border-green-200 text-green-800 text-sm">
                                "Thank you! Your message has been sent successfully."
                            </div>
                        </Show>
                        <Show when=move || status.get().is_error()>
                            <div class="p-3 rounded-lg bg-red-50 border border-red-200 text-red-800 text-sm">
                                "Something went wrong. Please try again later."
                            </div>
                        </Show>

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full px-4 py-2 text-white font-medium bg-black hover:bg-gray-800 active:bg-black rounded-lg duration-150 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
