//! Profile page with the payment-edit form

use leptos::prelude::*;
use leptos_meta::Title;

use crate::api;
use crate::components::Cta;
use crate::types::ProfileUpdate;

/// Profile page: account summary plus the edit form
#[component]
pub fn ProfilePage() -> impl IntoView {
    // Seeded form state, dropped when the page unmounts
    let seed = ProfileUpdate::seeded();
    let email = RwSignal::new(seed.email);
    let phone = RwSignal::new(seed.phone);
    let card_number = RwSignal::new(seed.card_number);
    let payment_method = RwSignal::new(seed.payment_method);
    let expiry_date = RwSignal::new(seed.expiry_date);
    let cvc = RwSignal::new(seed.cvc);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = ProfileUpdate {
            email: email.get(),
            phone: phone.get(),
            card_number: card_number.get(),
            payment_method: payment_method.get(),
            expiry_date: expiry_date.get(),
            cvc: cvc.get(),
        };
        api::submit_profile(&update);
    };

    view! {
        <Title text="BuyShop — Profile" />
        <div class="profile-container">
            <h1>"Jessica King"</h1>
            <img src="/assets/happy-buyer-2.jpg" alt="Profile" class="profile-image" />
            <div class="info">
                <p>"Email: " {move || email.get()}</p>
                <p>"Phone: " {move || phone.get()}</p>
            </div>

            <h2>"Payment Methods"</h2>
            <ul class="payment-list">
                <li>"Visa....2246"</li>
                <li>"MasterCard....3190"</li>
            </ul>

            <h2>"Edit Information"</h2>
            <form class="edit-form" on:submit=on_submit>
                <label>
                    "Email:"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        placeholder="jessicaking.52@gmail.com"
                        required=true
                    />
                </label>
                <label>
                    "Phone:"
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        placeholder="020 7946 0958"
                        required=true
                    />
                </label>
                <label>
                    "Card Number:"
                    <input
                        type="text"
                        prop:value=move || card_number.get()
                        on:input=move |ev| card_number.set(event_target_value(&ev))
                        placeholder="4024 6000 0000 0000"
                        required=true
                    />
                </label>
                <label>
                    "Select Payment Method:"
                    <select
                        prop:value=move || payment_method.get()
                        on:change=move |ev| payment_method.set(event_target_value(&ev))
                        class="method"
                    >
                        <option value="">"Select Payment"</option>
                        <option value="visa">"Visa"</option>
                        <option value="masterCard">"MasterCard"</option>
                        <option value="paypal">"Paypal"</option>
                    </select>
                </label>
                <div class="flex-group">
                    <label>
                        "Expiry Date:"
                        <input
                            type="text"
                            prop:value=move || expiry_date.get()
                            on:input=move |ev| expiry_date.set(event_target_value(&ev))
                            placeholder="01/25"
                            required=true
                        />
                    </label>
                    <label>
                        "CVC:"
                        <input
                            type="text"
                            prop:value=move || cvc.get()
                            on:input=move |ev| cvc.set(event_target_value(&ev))
                            placeholder="123"
                            required=true
                        />
                    </label>
                </div>
                <button type="submit">"Save Changes"</button>
            </form>

            <Cta />
        </div>
    }
}
