//! Shop navbar with the embedded search bar.

use leptos::prelude::*;

use crate::components::navbar::{MenuToggle, NavLink};
use crate::components::search_bar::SearchBar;

/// Navbar shown on `/shop`
#[component]
pub fn ShopNavbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="shop-navbar">
            <div class="logo">
                <SearchBar />
                <a href="/">
                    <img src="/assets/logo.png" alt="BuyShop logo" />
                </a>
                <h1 class="logo-name">"BuyShop"</h1>
            </div>
            <nav class=move || format!("navbar {}", if menu_open.get() { "open" } else { "" })>
                <NavLink href="/shop" label="Shop" menu_open=menu_open />
                // Category and deal pages are not routed yet; both land on the
                // shop grid for now.
                <a href="/shop" on:click=move |_| menu_open.set(false)>"Category"</a>
                <a href="/shop" on:click=move |_| menu_open.set(false)>"Deal"</a>
            </nav>
            <MenuToggle menu_open=menu_open />
        </header>
    }
}
