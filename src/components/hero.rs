//! Landing hero section.

use leptos::prelude::*;

/// Hero banner with the Buy/Sell calls to action
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-text">
                <h1>"Welcome To BuyShop"</h1>
                <p>
                    "Your trusted marketplace for selling or buying preowned goods at "
                    "great prices. Whether you are looking for quick cash or just to "
                    "upgrade, this is the place for you."
                </p>
            </div>
            <div class="hero-buttons">
                <a href="/shop" class="button-primary">"Buy"</a>
                <a href="/sell" class="button-secondary">"Sell"</a>
            </div>
        </section>
    }
}
