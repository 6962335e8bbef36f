//! Reactive page container

use leptos::prelude::*;
use tracing::debug;

use super::{CategorySelector, HeroBanner, ProductGrid};
use crate::catalog::Catalog;
use crate::types::Selection;

/// The storefront page.
///
/// Owns the only piece of page state, the active [`Selection`], which
/// starts at `initial` (`All` unless given). The selector writes it, the
/// grid reads it.
#[component]
pub fn StorefrontPage(
    catalog: Catalog,
    #[prop(optional)] initial: Selection,
) -> impl IntoView {
    let selection = RwSignal::new(initial);
    let categories = catalog.selector_labels();

    let on_select = Callback::new(move |label: Selection| {
        apply_selection(selection, label);
    });

    view! {
        <div class="storefront">
            <HeroBanner />
            <main class="storefront-main">
                <CategorySelector categories=categories selection=selection on_select=on_select />
                <ProductGrid catalog=catalog selection=selection />
            </main>
        </div>
    }
}

/// Apply a selector event to the page state.
///
/// Returns whether the selection changed; re-selecting the active
/// category leaves the signal untouched.
pub fn apply_selection(selection: RwSignal<Selection>, label: Selection) -> bool {
    if selection.with_untracked(|current| *current == label) {
        return false;
    }
    debug!(selection = %label, "category selected");
    selection.set(label);
    true
}
