//! Product grid and its empty state

use leptos::prelude::*;

use super::ProductCard;
use crate::catalog::Catalog;
use crate::motion::stagger_style;
use crate::types::Selection;

/// Message shown when no product matches the selection.
pub const EMPTY_MESSAGE: &str = "No products available in this category.";

/// Visible products for `selection`, one card each.
///
/// The visible set is derived from `(catalog, selection)` on every read.
/// Cards are keyed by product id so a new filter keeps the cards it
/// still shows.
#[component]
pub fn ProductGrid(
    catalog: Catalog,
    #[prop(into)] selection: Signal<Selection>,
) -> impl IntoView {
    let visible = Signal::derive(move || catalog.visible(&selection.get()));

    view! {
        <section class="showcase">
            <div class="showcase-header">
                <h2 class="showcase-title">"Our Collection"</h2>
                <p class="showcase-description">
                    "Discover our carefully curated selection of premium products"
                </p>
            </div>

            <Show
                when=move || visible.with(|products| !products.is_empty())
                fallback=|| view! { <EmptyState /> }
            >
                <div class="product-grid">
                    // Delay is fixed when a card mounts; the entrance animation only runs then
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, product)| product.id
                        children=|(index, product)| {
                            view! {
                                <div class="grid-item fade-in" style=stagger_style(index)>
                                    <ProductCard product=product />
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

/// Placeholder for a selection with no products.
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-message">{EMPTY_MESSAGE}</p>
        </div>
    }
}
