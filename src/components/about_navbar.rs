//! About navbar with the embedded search bar.

use leptos::prelude::*;

use crate::components::navbar::{MenuToggle, NavLink};
use crate::components::search_bar::SearchBar;

/// Navbar shown on `/about`
#[component]
pub fn AboutNavbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="about-navbar">
            <div class="logo">
                <SearchBar />
                <img src="/assets/logo.png" alt="BuyShop logo" />
                <h1 class="logo-name">"BuyShop"</h1>
            </div>
            <nav class=move || format!("navbar {}", if menu_open.get() { "open" } else { "" })>
                <NavLink href="/about" label="About" menu_open=menu_open />
                <NavLink href="/" label="Home" menu_open=menu_open />
                <NavLink href="/shop" label="Shop" menu_open=menu_open />
                <NavLink href="/contact" label="Contact" menu_open=menu_open />
            </nav>
            <MenuToggle menu_open=menu_open />
        </header>
    }
}
