//! Save-your-updates call to action on the profile page.

use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta-text">
                <h2>"Save your updates"</h2>
                <p>
                    "Ensure your profile is up-to-date by saving your changes now."
                    <br />
                    "Your updates will be applied right away."
                </p>
                <a href="/sell" class="cta-button">"Join for free"</a>
            </div>
            <div class="cta-image">
                <img src="/assets/happy-buyer.jpg" alt="Happy customer" />
            </div>
        </section>
    }
}
