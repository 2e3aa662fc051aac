//! Search field shown inside the shop and about navbars.

use leptos::prelude::*;

use crate::components::icons::IconSearch;

/// Decorative search field; product filtering is not wired up.
#[component]
pub fn SearchBar() -> impl IntoView {
    view! {
        <div class="search-box">
            <IconSearch />
            <input type="text" placeholder="search..." />
        </div>
    }
}
