//! Sell page: listing form, finalise panel, FAQ

use leptos::prelude::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{Faq, Finalise};
use crate::types::ListingDraft;

/// Sell-your-item page
#[component]
pub fn SellPage() -> impl IntoView {
    // Form state, dropped when the page unmounts
    let image = RwSignal::new(Option::<String>::None);
    let description = RwSignal::new(String::new());
    let brand = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    // Build a preview URL from the file actually picked in the change event
    let on_image_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match file {
            Some(file) => match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => image.set(Some(url)),
                Err(_) => tracing::warn!("could not create a preview URL for the selected image"),
            },
            None => image.set(None),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ListingDraft {
            description: description.get(),
            brand: brand.get(),
            price: price.get(),
            image: image.get(),
        };
        api::submit_listing(&draft);
    };

    view! {
        <Title text="BuyShop — Sell" />
        <div class="sell-item">
            <h2>"Sell Your Item"</h2>
            <form on:submit=on_submit>
                <div class="upload-section">
                    <label>"Upload"</label>
                    <input type="file" accept="image/*" on:change=on_image_change />
                    {move || {
                        image
                            .get()
                            .map(|url| view! { <img src=url alt="Preview" class="preview-image" /> })
                    }}
                </div>
                <div class="item-details">
                    <label>"Detailed Description:"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        placeholder="Enter item details here..."
                    ></textarea>

                    <label>"Brand:"</label>
                    <select
                        prop:value=move || brand.get()
                        on:change=move |ev| brand.set(event_target_value(&ev))
                        required=true
                    >
                        <option value="">"Select a Brand"</option>
                        <option value="Apple">"Apple"</option>
                        <option value="Samsung">"Samsung"</option>
                        <option value="Nike">"Nike"</option>
                        <option value="Oppo">"Oppo"</option>
                    </select>

                    <label>"Price ($):"</label>
                    <input
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        placeholder="Enter price"
                        min="0"
                        required=true
                    />
                </div>
                <button type="submit" class="button-primary">"List Item"</button>
            </form>
            <Finalise />
            <Faq />
        </div>
    }
}
