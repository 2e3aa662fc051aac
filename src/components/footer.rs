//! Site footer, rendered on every route.

use leptos::prelude::*;

use crate::api;
use crate::components::icons::{IconFacebook, IconLinkedin, IconTwitter, IconYoutube};
use crate::types::NewsletterSignup;

/// Footer with the newsletter form, link columns, and social icons
#[component]
pub fn Footer() -> impl IntoView {
    let email = RwSignal::new(String::new());

    let on_subscribe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        api::subscribe_newsletter(&NewsletterSignup { email: email.get() });
        email.set(String::new());
    };

    view! {
        <footer class="footer">
            <div class="footer-logo">
                <img src="/assets/logo.png" alt="BuyShop logo" />
                <h2>"BuyShop"</h2>
            </div>

            <div class="newsletter">
                <p>"Subscribe to our newsletter"</p>
                <form on:submit=on_subscribe>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        placeholder="Enter your email"
                        required=true
                    />
                    <button type="submit" class="footer-button">"Subscribe"</button>
                </form>
            </div>

            <div class="footer-links">
                <div class="footer-column">
                    <h3>"Product"</h3>
                    <ul>
                        <li><a href="/shop">"Features"</a></li>
                        <li><a href="/shop">"Pricing"</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>"Resources"</h3>
                    <ul>
                        <li><a href="/about">"Blog"</a></li>
                        <li><a href="/profile">"User"</a></li>
                        <li><a href="/about">"Webinars"</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>"Company"</h3>
                    <ul>
                        <li><a href="/about">"About Us"</a></li>
                        <li><a href="/contact">"Contact Us"</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>"Plans & Pricing"</h3>
                    <ul>
                        <li><a href="/shop">"Personal"</a></li>
                        <li><a href="/shop">"Start up"</a></li>
                        <li><a href="/shop">"Organization"</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <select>
                    <option value="en">"English"</option>
                </select>
                <ul>
                    <li>"© 2025 BuyShop, Inc."</li>
                    <li><a href="/about">"Privacy"</a></li>
                    <li><a href="/about">"Terms"</a></li>
                    <li><a href="/about">"Sitemap"</a></li>
                </ul>
                <div class="social-icons">
                    <a href="https://twitter.com" target="_blank"><IconTwitter /></a>
                    <a href="https://facebook.com" target="_blank"><IconFacebook /></a>
                    <a href="https://linkedin.com" target="_blank"><IconLinkedin /></a>
                    <a href="https://youtube.com" target="_blank"><IconYoutube /></a>
                </div>
            </div>
        </footer>
    }
}
