//! What-happens-next strip on the sell page.

use leptos::prelude::*;

use crate::components::icons::{IconBag, IconPackage, IconTruck};

/// Explains what happens to a listing after it is submitted
#[component]
pub fn Finalise() -> impl IntoView {
    view! {
        <section class="finalise">
            <h2>"Finalise your listing"</h2>
            <div class="finalise-steps">
                <div class="finalise-step">
                    <IconPackage />
                    <h3>"We review it"</h3>
                    <p>"Your listing is checked against the marketplace rules, usually within a day."</p>
                </div>
                <div class="finalise-step">
                    <IconBag />
                    <h3>"It goes live"</h3>
                    <p>"Approved listings appear in the shop grid where buyers can find them."</p>
                </div>
                <div class="finalise-step">
                    <IconTruck />
                    <h3>"We handle shipping"</h3>
                    <p>"Once sold, package the item and we pick it up and deliver it."</p>
                </div>
            </div>
        </section>
    }
}
