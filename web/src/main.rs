// Storefront — Leptos 0.8 client-side mount
// Built with trunk: `trunk serve` from this directory

use leptos::prelude::*;
use storefront::Catalog;
use storefront::components::StorefrontPage;
use storefront::styles::STOREFRONT_CSS;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{STOREFRONT_CSS}</style>
        <StorefrontPage catalog=Catalog::builtin() />
    }
}
