//! Home/landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Hero;
use crate::data;

/// Home page with the hero section and a product teaser grid
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="BuyShop" />
        <Hero />
        <div class="teaser-grid">
            {data::TEASER_LISTINGS
                .iter()
                .map(|listing| {
                    view! {
                        <div class="teaser-card">
                            <img src=listing.image alt=listing.name class="teaser-image" />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
