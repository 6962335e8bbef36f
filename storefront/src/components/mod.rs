//! Leptos UI components for the storefront page.
//!
//! Each component is a Leptos `#[component]` function. The same
//! components back both rendering modes: the reactive page mounted in the
//! browser and the static document produced by [`crate::render_storefront`].
//!
//! # Component Hierarchy
//!
//! ```text
//! StorefrontPage (owns the selection signal)
//! ├── HeroBanner
//! │   └── FallbackImage (hide on failure)
//! ├── CategorySelector
//! └── ProductGrid
//!     ├── EmptyState (no visible products)
//!     └── ProductCard (per visible product, keyed by id)
//!         └── FallbackImage (placeholder on failure)
//!
//! StorefrontDocument (static HTML shell)
//! ├── HeroBanner
//! ├── CategorySelector
//! └── ProductGrid panel per selector label
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use storefront::{Catalog, components::StorefrontPage};
//!
//! view! { <StorefrontPage catalog=Catalog::builtin() /> }
//! ```

mod card;
mod document;
mod grid;
mod hero;
mod image;
mod page;
mod selector;

pub use card::ProductCard;
pub use document::StorefrontDocument;
pub use grid::{EmptyState, ProductGrid};
pub use hero::HeroBanner;
pub use image::FallbackImage;
pub use page::{StorefrontPage, apply_selection};
pub use selector::{CategoryControl, CategorySelector};
