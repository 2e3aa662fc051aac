//! Product cards for the shop grid.

use leptos::prelude::*;

use crate::data::Listing;

/// One product card with image, name, price, and a buy action
#[component]
pub fn ListingCard(listing: &'static Listing) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-image">
                <img src=listing.image alt=listing.name />
            </div>
            <div class="card-name">
                <h3>{listing.name}</h3>
                <p>{listing.price}</p>
            </div>
            <div class="card-button">
                <p>"Buy Now"</p>
            </div>
        </div>
    }
}
