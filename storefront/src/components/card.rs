//! Product card

use leptos::prelude::*;

use super::FallbackImage;
use crate::fallback::FallbackPolicy;
use crate::types::Product;

/// A single product: image, name, price and category.
///
/// The "Add to Cart" button is a visual affordance with no handler.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let alt = format!("Image of {} product display", product.name);

    view! {
        <article class="product-card" data-product-id=product.id.to_string()>
            <div class="product-image">
                <FallbackImage
                    class_name="product-photo"
                    src=product.image
                    alt=alt
                    policy=FallbackPolicy::product_placeholder()
                />
            </div>
            <h3 class="product-name">{product.name}</h3>
            <p class="product-price">{product.price}</p>
            <p class="product-category">{product.category}</p>
            <button type="button" class="add-to-cart">
                "Add to Cart"
            </button>
        </article>
    }
}
