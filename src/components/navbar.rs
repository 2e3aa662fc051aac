//! Navbar dispatch and the default storefront navbar.
//!
//! The `Navbar` component subscribes to the live pathname and renders exactly
//! one variant; every variant keeps its own mobile-menu toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::{IconBag, IconClose, IconKey, IconMenu, IconSearch};
use crate::nav::{active_class, NavbarVariant};

use super::about_navbar::AboutNavbar;
use super::sell_navbar::SellNavbar;
use super::shop_navbar::ShopNavbar;

/// Renders the navbar variant selected for the current path
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    move || match NavbarVariant::for_path(&location.pathname.get()) {
        NavbarVariant::Shop => view! { <ShopNavbar /> }.into_any(),
        NavbarVariant::About => view! { <AboutNavbar /> }.into_any(),
        NavbarVariant::Sell => view! { <SellNavbar /> }.into_any(),
        NavbarVariant::Main => view! { <MainNavbar /> }.into_any(),
    }
}

/// Default storefront navbar with the Sell/Buy call-to-action buttons
#[component]
fn MainNavbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="header">
            <div class="logo">
                <img src="/assets/logo.png" alt="BuyShop logo" />
                <h1 class="logo-name">"BuyShop"</h1>
            </div>
            <nav class=move || format!("navbar {}", if menu_open.get() { "open" } else { "" })>
                <NavLink href="/" label="Home" menu_open=menu_open />
                <NavLink href="/shop" label="Shop" menu_open=menu_open />
                <NavLink href="/about" label="About" menu_open=menu_open />
                <NavLink href="/contact" label="Contact" menu_open=menu_open />
                <NavLink href="/blog" label="Blog" menu_open=menu_open />
            </nav>
            <div class="buttons">
                <a href="/sell" class="button-sell">
                    <IconKey />
                    " Sell"
                </a>
                <a href="/shop" class="button-buy">
                    <IconBag />
                    " Buy"
                </a>
            </div>
            <span class="search-shortcut">
                <IconSearch />
            </span>
            <MenuToggle menu_open=menu_open />
        </header>
    }
}

/// Navbar link that highlights itself while its route is active and closes
/// the mobile menu when followed.
#[component]
pub fn NavLink(
    /// Route the link navigates to
    href: &'static str,
    label: &'static str,
    /// The owning navbar's menu toggle
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    let location = use_location();

    view! {
        <a
            href=href
            class=move || active_class(&location.pathname.get(), href)
            on:click=move |_| menu_open.set(false)
        >
            {label}
        </a>
    }
}

/// Hamburger/close toggle for the mobile link list
#[component]
pub fn MenuToggle(menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="menu-icon"
            on:click=move |_| menu_open.update(|open| *open = !*open)
        >
            {move || {
                if menu_open.get() {
                    view! { <IconClose /> }.into_any()
                } else {
                    view! { <IconMenu /> }.into_any()
                }
            }}
        </button>
    }
}
