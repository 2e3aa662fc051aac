//! Contact page with the contact form

use leptos::prelude::*;
use leptos_meta::Title;

use crate::api;
use crate::components::icons::{IconEnvelope, IconMapPin, IconPhone, IconUser};
use crate::types::ContactMessage;

/// Contact page: info column plus the message form
#[component]
pub fn ContactPage() -> impl IntoView {
    // Form state, dropped when the page unmounts
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let snapshot = ContactMessage {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            message: message.get(),
        };
        api::submit_contact(&snapshot);
    };

    view! {
        <Title text="BuyShop — Contact" />
        <div class="contact-container">
            <div class="contact-info">
                <h2>"Contact Us"</h2>
                <p>
                    "Feel free to use the form to drop us an email. "
                    "Old fashioned phone calls work too."
                </p>
                <div class="info-item">
                    <IconPhone />
                    <p>"0123456789"</p>
                </div>
                <div class="info-item">
                    <IconEnvelope />
                    <p>"info@buyshop.com"</p>
                </div>
                <div class="info-item">
                    <IconMapPin />
                    <p>"Somewhere out there"</p>
                </div>
            </div>

            <form class="contact-form" on:submit=on_submit>
                <div class="input-group">
                    <div class="input-with-icon">
                        <IconUser />
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                            placeholder="First Name"
                            required=true
                        />
                    </div>
                    <div class="input-with-icon">
                        <IconUser />
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                            placeholder="Last Name"
                            required=true
                        />
                    </div>
                </div>
                <div class="input-with-icon">
                    <IconEnvelope />
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        placeholder="Email"
                        required=true
                    />
                </div>
                <div class="input-with-icon">
                    <IconPhone />
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        placeholder="Phone Number"
                        required=true
                    />
                </div>
                <textarea
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    placeholder="Your Message"
                    required=true
                ></textarea>
                <button type="submit" class="contact-button">"Submit"</button>
            </form>
        </div>
    }
}
