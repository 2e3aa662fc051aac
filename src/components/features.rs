//! Blog feature cards on the about page.

use leptos::prelude::*;

use crate::components::icons::{IconArrowRight, IconSearch, IconShield, IconUser};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h2>"Blog"</h2>
            <div class="feature-grid">
                <div class="feature-card">
                    <IconUser />
                    <h3>"User-Friendly UI"</h3>
                    <h4>"Interface Design"</h4>
                    <p>
                        "Navigate effortlessly with an intuitive and visually appealing "
                        "design that enhances the shopping experience."
                    </p>
                    <IconArrowRight />
                </div>
                <div class="feature-card">
                    <IconShield />
                    <h3>"Secure Payment"</h3>
                    <h4>"Transaction Safety"</h4>
                    <p>
                        "Enjoy peace of mind with robust encryption and multi-layered "
                        "security on all your transactions."
                    </p>
                    <IconArrowRight />
                </div>
                <div class="feature-card">
                    <IconSearch />
                    <h3>"Advanced Search"</h3>
                    <h4>"Search Optimization"</h4>
                    <p>
                        "Quickly find products with smart filters, predictive text, and "
                        "personalized search results."
                    </p>
                    <IconArrowRight />
                </div>
            </div>
            <a href="/about" class="explore-button">"Read more"</a>
        </section>
    }
}
