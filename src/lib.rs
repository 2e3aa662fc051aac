//! BuyShop storefront - Leptos single-page marketplace UI
//!
//! Client-side rendered shop front with route-driven navbar selection.

pub mod api;
pub mod components;
pub mod data;
pub mod nav;
pub mod pages;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::{Footer, Navbar};
use pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, profile::ProfilePage, sell::SellPage,
    shop::ShopPage,
};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/shop") view=ShopPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/sell") view=SellPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"We could not find that page."</p>
            <a href="/" class="button-primary">"Back to BuyShop"</a>
        </div>
    }
}
