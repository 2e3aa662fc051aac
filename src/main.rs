use buyshop_ui::App;
use leptos::prelude::*;

fn main() {
    // Readable panic messages in the browser console
    console_error_panic_hook::set_once();

    // Route tracing output to the browser console
    tracing_wasm::set_as_global_default();

    // Mount the app
    mount_to_body(App);
}
