//! Sell navbar with the profile-image shortcut.

use leptos::prelude::*;

use crate::components::navbar::{MenuToggle, NavLink};

/// Navbar shown on `/sell`
#[component]
pub fn SellNavbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="sell-navbar">
            <div class="logo">
                <img src="/assets/logo.png" alt="BuyShop logo" />
                <h1 class="logo-name">"BuyShop"</h1>
            </div>
            <nav class=move || format!("navbar {}", if menu_open.get() { "open" } else { "" })>
                <NavLink href="/sell" label="Sell" menu_open=menu_open />
                <NavLink href="/" label="Home" menu_open=menu_open />
                <NavLink href="/profile" label="Profile" menu_open=menu_open />
            </nav>
            <a href="/profile" class="profile-shortcut">
                <img src="/assets/happy-buyer.jpg" alt="Your profile" />
            </a>
            <MenuToggle menu_open=menu_open />
        </header>
    }
}
