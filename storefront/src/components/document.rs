//! Root document component - the complete static HTML page
//!
//! Without hydration the page cannot run the reactive container, so every
//! selector label gets a pre-rendered grid panel and a small inline script
//! swaps panels and applies image fallbacks.

use leptos::prelude::*;

use super::{CategorySelector, HeroBanner, ProductGrid};
use crate::RenderOptions;
use crate::catalog::Catalog;
use crate::styles::{CSP, STOREFRONT_CSS};
use crate::types::Selection;

/// The complete HTML document for the storefront
#[component]
pub fn StorefrontDocument(catalog: Catalog, options: RenderOptions) -> impl IntoView {
    let RenderOptions {
        title,
        initial_selection,
    } = options;

    let categories = catalog.selector_labels();
    let mut panels = categories.clone();
    // A selection outside the selector still needs a panel to show its empty state
    if !panels.contains(&initial_selection) {
        panels.push(initial_selection.clone());
    }

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{STOREFRONT_CSS}</style>
            </head>
            <body>
                <div class="storefront">
                    <HeroBanner />
                    <main class="storefront-main">
                        <CategorySelector
                            categories=categories
                            selection=Signal::stored(initial_selection.clone())
                            on_select=|_: Selection| {}
                        />
                        {panels.into_iter().map(|label| {
                            let panel = label.to_string();
                            let class = if label == initial_selection {
                                "grid-panel active"
                            } else {
                                "grid-panel"
                            };
                            view! {
                                <div class=class data-panel=panel>
                                    <ProductGrid catalog=catalog.clone() selection=Signal::stored(label) />
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </main>
                </div>

                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Page logic (Category panels, Image fallback)
const PAGE_SCRIPT: &str = r#"
(() => {
  // 1. Category selection - swap the active grid panel
  const buttons = document.querySelectorAll('.category-selector [data-selection]');
  buttons.forEach(btn => {
      btn.addEventListener('click', () => {
          const selection = btn.dataset.selection;

          buttons.forEach(b => {
              const selected = b === btn;
              b.classList.toggle('selected', selected);
              b.classList.toggle('unselected', !selected);
          });

          document.querySelectorAll('.grid-panel').forEach(p => {
              p.classList.toggle('active', p.dataset.panel === selection);
          });
      });
  });

  // 2. Image fallback - at most once per element
  const applyFallback = (img) => {
      img.onerror = null;
      const rule = img.dataset.fallback || '';
      if (rule === 'hide') {
          img.style.display = 'none';
      } else if (rule.startsWith('replace:')) {
          img.src = rule.slice('replace:'.length);
      }
  };

  document.querySelectorAll('img[data-fallback]').forEach(img => {
      // Failed before this script ran
      if (img.complete && img.naturalWidth === 0) {
          applyFallback(img);
          return;
      }
      img.onerror = () => applyFallback(img);
  });
})();
"#;
