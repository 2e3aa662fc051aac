//! Shop page with the product card grid

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Banner, ListingCard};
use crate::data;

/// Shop page: heading, card grid, promo banner
#[component]
pub fn ShopPage() -> impl IntoView {
    view! {
        <Title text="BuyShop — Shop" />
        <div class="shop-container">
            <div class="heading-text">
                <h1>"Featured products"</h1>
            </div>
            <div class="card-grid">
                {data::SHOP_LISTINGS
                    .iter()
                    .map(|listing| view! { <ListingCard listing=listing /> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="banner-holder">
                <Banner />
            </div>
        </div>
    }
}
