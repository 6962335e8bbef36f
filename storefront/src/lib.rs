//! # storefront
//!
//! Leptos components for a small storefront page: a hero banner, a
//! category filter and a grid of product cards drawn from a fixed catalog.
//!
//! The same components run in two modes:
//!
//! - **Static** (`ssr`, default) - [`render_storefront`] produces a
//!   complete HTML document with a small inline script for category
//!   switching and image fallbacks
//! - **Browser** (`csr`) - [`components::StorefrontPage`] mounted with
//!   `leptos::mount::mount_to_body`, selection held in a signal
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront::{render_storefront, Catalog, RenderOptions};
//!
//! let html = render_storefront(&Catalog::builtin(), &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - products, selections, control styles
//! - [`catalog`] - the immutable catalog and the grid's filter
//! - [`fallback`] - one-shot image failure handling
//! - [`motion`] - staggered animation delays
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod fallback;
pub mod motion;
pub mod styles;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{ControlStyle, Product, Selection};

#[cfg(feature = "ssr")]
use components::{StorefrontDocument, StorefrontPage};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Options for the static page.
///
/// # Example
///
/// ```rust
/// use storefront::{RenderOptions, Selection};
///
/// let options = RenderOptions {
///     initial_selection: Selection::from("Electronics"),
///     ..Default::default()
/// };
/// assert_eq!(options.title, "Storefront");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document `<title>`
    pub title: String,
    /// Category shown when the page loads
    pub initial_selection: Selection,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Storefront".to_string(),
            initial_selection: Selection::All,
        }
    }
}

/// Render the complete static storefront document.
///
/// Returns a full HTML document including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_storefront(catalog: &Catalog, options: &RenderOptions) -> String {
    tracing::debug!(
        products = catalog.len(),
        selection = %options.initial_selection,
        "rendering storefront document"
    );
    // <For> in the grid registers with the current owner
    let html = Owner::new().with(|| {
        view! {
            <StorefrontDocument catalog=catalog.clone() options=options.clone() />
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the reactive page as it looks with `selection` active.
///
/// No document shell, styles or script; the markup the browser mount
/// produces for the same state.
#[cfg(feature = "ssr")]
pub fn render_page(catalog: &Catalog, selection: Selection) -> String {
    Owner::new().with(|| {
        view! { <StorefrontPage catalog=catalog.clone() initial=selection /> }.to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::{CategorySelector, ProductGrid, apply_selection};
    use crate::fallback::PRODUCT_PLACEHOLDER;
    use pretty_assertions::assert_eq;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            image: format!("https://example.test/{id}.png"),
            price: format!("${id}.00"),
            category: category.into(),
        }
    }

    fn scenario() -> Catalog {
        Catalog::new(vec![
            product(1, "Clothing"),
            product(2, "Electronics"),
            product(3, "Clothing"),
        ])
        .unwrap()
    }

    /// Product ids of rendered cards, in document order.
    fn card_ids(html: &str) -> Vec<u64> {
        const MARKER: &str = "data-product-id=\"";
        html.match_indices(MARKER)
            .map(|(at, _)| {
                let rest = &html[at + MARKER.len()..];
                let end = rest.find('"').unwrap();
                rest[..end].parse().unwrap()
            })
            .collect()
    }

    /// Opening tag of the first element carrying `attr`.
    fn tag_with<'a>(html: &'a str, attr: &str) -> &'a str {
        let at = html.find(attr).unwrap();
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..end]
    }

    /// Opening tag of the selector button for `label`.
    fn selector_button<'a>(html: &'a str, label: &str) -> &'a str {
        tag_with(html, &format!("data-selection=\"{label}\""))
    }

    #[test]
    fn renders_document_shell() {
        let html = render_storefront(&Catalog::builtin(), &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Storefront"));
        assert!(html.contains("Discover the Ultimate Style"));
        assert!(html.contains("Our Collection"));
    }

    #[test]
    fn page_filters_scenario_catalog() {
        let catalog = scenario();

        assert_eq!(card_ids(&render_page(&catalog, Selection::All)), vec![1, 2, 3]);
        assert_eq!(card_ids(&render_page(&catalog, "Clothing".into())), vec![1, 3]);
        assert_eq!(card_ids(&render_page(&catalog, "Electronics".into())), vec![2]);
    }

    #[test]
    fn absent_category_shows_empty_state() {
        let html = render_page(&scenario(), "Sports".into());

        assert!(card_ids(&html).is_empty());
        assert!(html.contains("No products available in this category."));
        assert!(!html.contains("product-grid"));
    }

    #[test]
    fn non_empty_selection_has_no_empty_state() {
        let html = render_page(&scenario(), "Clothing".into());
        assert!(!html.contains("No products available in this category."));
    }

    #[test]
    fn reselecting_active_category_is_idempotent() {
        let catalog = scenario();
        let selection = RwSignal::new(Selection::All);
        let snapshot = |catalog: &Catalog| {
            Owner::new().with(|| {
                view! {
                    <CategorySelector
                        categories=catalog.selector_labels()
                        selection=selection
                        on_select=move |label: Selection| {
                            apply_selection(selection, label);
                        }
                    />
                    <ProductGrid catalog=catalog.clone() selection=selection />
                }
                .to_html()
            })
        };

        assert!(apply_selection(selection, Selection::from("Clothing")));
        let before = snapshot(&catalog);

        assert!(!apply_selection(selection, Selection::from("Clothing")));
        let after = snapshot(&catalog);

        assert_eq!(selection.get_untracked(), Selection::from("Clothing"));
        assert_eq!(card_ids(&after), vec![1, 3]);
        assert_eq!(before, after);
    }

    #[test]
    fn grid_follows_selection_signal() {
        let catalog = scenario();
        let selection = RwSignal::new(Selection::from("Electronics"));
        let grid = |catalog: &Catalog| {
            Owner::new().with(|| {
                view! { <ProductGrid catalog=catalog.clone() selection=selection /> }.to_html()
            })
        };

        assert_eq!(card_ids(&grid(&catalog)), vec![2]);
        selection.set(Selection::from("Clothing"));
        assert_eq!(card_ids(&grid(&catalog)), vec![1, 3]);
        selection.set(Selection::All);
        assert_eq!(card_ids(&grid(&catalog)), vec![1, 2, 3]);
    }

    #[test]
    fn selector_marks_only_active_control() {
        let html = render_page(&scenario(), "Electronics".into());

        assert!(selector_button(&html, "Electronics").contains("category-btn selected"));
        assert!(selector_button(&html, "All").contains("category-btn unselected"));
        assert!(selector_button(&html, "Clothing").contains("category-btn unselected"));
    }

    #[test]
    fn card_shows_fields_and_fallback_policy() {
        let html = render_page(&scenario(), Selection::All);

        assert!(html.contains("Product 2"));
        assert!(html.contains("$2.00"));
        assert!(html.contains("Electronics"));
        assert!(html.contains("https://example.test/2.png"));
        assert!(html.contains("Image of Product 2 product display"));
        assert!(html.contains(&format!("data-fallback=\"replace:{PRODUCT_PLACEHOLDER}\"")));
        assert!(html.contains("data-fallback=\"hide\""));
        assert!(html.contains("Add to Cart"));
    }

    #[test]
    fn cards_are_staggered_by_visible_index() {
        let html = render_page(&scenario(), "Clothing".into());

        assert!(html.contains("animation-delay: 0s; animation-fill-mode: both;"));
        assert!(html.contains("animation-delay: 0.1s; animation-fill-mode: both;"));
        assert!(!html.contains("animation-delay: 0.2s; animation-fill-mode: both;"));
    }

    #[test]
    fn document_prerenders_one_panel_per_label() {
        let options = RenderOptions {
            initial_selection: "Clothing".into(),
            ..Default::default()
        };
        let html = render_storefront(&scenario(), &options);

        assert!(tag_with(&html, "data-panel=\"Clothing\"").contains("grid-panel active"));
        assert!(tag_with(&html, "data-panel=\"All\"").contains("class=\"grid-panel\""));
        assert!(tag_with(&html, "data-panel=\"Electronics\"").contains("class=\"grid-panel\""));
        // All: 3 cards, Clothing: 2, Electronics: 1
        assert_eq!(card_ids(&html), vec![1, 2, 3, 1, 3, 2]);
        assert!(selector_button(&html, "Clothing").contains("category-btn selected"));
    }

    #[test]
    fn document_has_single_all_control_and_panel() {
        let catalog = Catalog::new(vec![product(1, "All"), product(2, "Clothing")]).unwrap();
        let html = render_storefront(&catalog, &RenderOptions::default());

        assert_eq!(html.matches("data-selection=\"All\"").count(), 1);
        assert_eq!(html.matches("data-panel=\"All\"").count(), 1);
        assert_eq!(html.matches("data-panel=").count(), 2);
    }

    #[test]
    fn document_adds_panel_for_unlisted_selection() {
        let options = RenderOptions {
            initial_selection: "Sports".into(),
            ..Default::default()
        };
        let html = render_storefront(&scenario(), &options);

        assert!(tag_with(&html, "data-panel=\"Sports\"").contains("grid-panel active"));
        assert!(html.contains("No products available in this category."));
        assert!(!html.contains("data-selection=\"Sports\""));
    }
}
