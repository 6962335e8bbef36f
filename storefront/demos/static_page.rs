//! Static storefront page from the builtin catalog.
//!
//! Run with: `cargo run --example static_page`

use storefront::{Catalog, RenderOptions, render_storefront};

fn main() {
    let catalog = Catalog::builtin();

    // Opens on the full catalog; the page script switches categories
    let html = render_storefront(&catalog, &RenderOptions::default());

    let output_path = "storefront.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
