//! Image load failure handling.
//!
//! Every storefront image owns an [`ImageSlot`]. The first load error
//! applies the slot's [`FallbackPolicy`]; the slot is then disarmed, so a
//! failing placeholder can never trigger another round of error handling.
//!
//! ```rust
//! use storefront::fallback::{FallbackPolicy, ImageSlot};
//!
//! let mut slot = ImageSlot::new("broken.png", FallbackPolicy::Replace("placeholder.png".into()));
//! assert!(slot.on_error());
//! assert_eq!(slot.src(), "placeholder.png");
//!
//! // the placeholder failing too changes nothing
//! assert!(!slot.on_error());
//! assert_eq!(slot.src(), "placeholder.png");
//! ```

/// Placeholder shown when a product image fails to load.
pub const PRODUCT_PLACEHOLDER: &str = "https://placehold.co/400x300?text=Product+Image+Unavailable";

/// What to do with an image element whose resource failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Point the element at this URI instead
    Replace(String),
    /// Stop displaying the element
    Hide,
}

impl FallbackPolicy {
    /// Placeholder substitution used by product cards.
    pub fn product_placeholder() -> Self {
        FallbackPolicy::Replace(PRODUCT_PLACEHOLDER.to_string())
    }

    /// Value of the `data-fallback` attribute read by the static page script.
    pub fn data_attr(&self) -> String {
        match self {
            FallbackPolicy::Replace(uri) => format!("replace:{uri}"),
            FallbackPolicy::Hide => "hide".to_string(),
        }
    }
}

/// Per-element image state with a one-shot error handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    hidden: bool,
    armed: bool,
    policy: FallbackPolicy,
}

impl ImageSlot {
    /// Slot showing `src`, armed with `policy`.
    pub fn new(src: impl Into<String>, policy: FallbackPolicy) -> Self {
        Self {
            src: src.into(),
            hidden: false,
            armed: true,
            policy,
        }
    }

    /// URI the element should currently display.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Whether the element is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the next error will still be handled.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Policy this slot applies on failure.
    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// Handle a load error. Returns `true` only for the call that acted.
    pub fn on_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        match &self.policy {
            FallbackPolicy::Replace(uri) => self.src = uri.clone(),
            FallbackPolicy::Hide => self.hidden = true,
        }
        true
    }
}
