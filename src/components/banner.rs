//! Seasonal promo banner shown under the shop grid.

use leptos::prelude::*;

use crate::components::icons::IconCart;

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section class="banner">
            <div class="banner-content">
                <h2 class="banner-title">"Seasonal Sale Extravaganza"</h2>
                <h1 class="banner-highlight">"FREE DELIVERY!!"</h1>
                <a href="/shop" class="banner-button">
                    <IconCart />
                    " Shop Now!"
                </a>
            </div>
            <img src="/assets/happy-buyer.jpg" alt="Sale banner" class="banner-image" />
        </section>
    }
}
