//! Image element with a one-shot load failure handler

use leptos::prelude::*;
use tracing::debug;

use crate::fallback::{FallbackPolicy, ImageSlot};

/// `<img>` backed by an [`ImageSlot`].
///
/// In the browser the element's `error` event drives the slot. Static
/// pages carry the policy in `data-fallback` for the page script instead.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    policy: FallbackPolicy,
    class_name: &'static str,
) -> impl IntoView {
    let data_fallback = policy.data_attr();
    let slot = RwSignal::new(ImageSlot::new(src, policy));

    view! {
        <img
            class=class_name
            src=move || slot.with(|slot| slot.src().to_string())
            alt=alt
            data-fallback=data_fallback
            class:hidden=move || slot.with(|slot| slot.is_hidden())
            on:error=move |_| {
                slot.update(|slot| {
                    if slot.on_error() {
                        debug!(src = slot.src(), "image fallback applied");
                    }
                });
            }
        />
    }
}
