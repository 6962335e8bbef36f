//! Storefront data types.
//!
//! These types define the data model shared by every component:
//!
//! - **Serializable** - catalogs load from JSON via serde
//! - **Clone-friendly** - components move owned copies into closures
//! - **Plain values** - no interior mutability, nothing to lock
//!
//! # Example
//!
//! ```rust
//! use storefront::types::{Product, Selection};
//!
//! let jacket = Product {
//!     id: 1,
//!     name: "Denim Jacket".into(),
//!     image: "https://placehold.co/400x300?text=Denim+Jacket".into(),
//!     price: "$89.99".into(),
//!     category: "Clothing".into(),
//! };
//!
//! assert!(Selection::from("Clothing").matches(&jacket));
//! assert!(Selection::All.matches(&jacket));
//! assert!(!Selection::from("clothing").matches(&jacket));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label of the synthetic selector entry that shows every product.
pub const ALL_LABEL: &str = "All";

/// A single product offered by the storefront.
///
/// `price` is a display string. Nothing in the storefront does arithmetic
/// on it, so it stays exactly as the catalog spells it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within a catalog; used as the list key for card rendering
    pub id: u64,
    /// Display name
    pub name: String,
    /// Image URI; may fail to load at render time
    pub image: String,
    /// Pre-formatted price, e.g. `"$49.99"`
    pub price: String,
    /// Category label, matched verbatim against the selection
    pub category: String,
}

/// The active category filter.
///
/// Owned by the page container and changed only by a selector event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Show the whole catalog
    #[default]
    All,
    /// Show products whose category equals this string exactly
    Category(String),
}

impl Selection {
    /// Whether `product` belongs to the visible set for this selection.
    ///
    /// Exact string equality: no case folding, no trimming.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(category) => product.category == *category,
        }
    }

    /// Label shown on the selector control.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Category(category) => category,
        }
    }
}

impl From<&str> for Selection {
    fn from(label: &str) -> Self {
        if label == ALL_LABEL {
            Selection::All
        } else {
            Selection::Category(label.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(label: String) -> Self {
        if label == ALL_LABEL {
            Selection::All
        } else {
            Selection::Category(label)
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from(s))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual state of a selector control.
///
/// Resolved once per control per render from the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlStyle {
    /// The control matches the active selection
    Selected,
    /// Any other control
    Unselected,
}

impl ControlStyle {
    /// Style for the control labelled `label` while `current` is active.
    pub fn resolve(label: &Selection, current: &Selection) -> Self {
        if label == current {
            ControlStyle::Selected
        } else {
            ControlStyle::Unselected
        }
    }

    /// CSS class list for the control.
    pub fn class(self) -> &'static str {
        match self {
            ControlStyle::Selected => "category-btn selected",
            ControlStyle::Unselected => "category-btn unselected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str) -> Product {
        Product {
            id: 1,
            name: "Item".into(),
            image: "img.png".into(),
            price: "$1.00".into(),
            category: category.into(),
        }
    }

    #[test]
    fn all_label_parses_to_all() {
        assert_eq!(Selection::from("All"), Selection::All);
        assert_eq!("All".parse::<Selection>(), Ok(Selection::All));
        assert_eq!(Selection::from(String::from("All")), Selection::All);
    }

    #[test]
    fn category_match_is_exact() {
        let shirt = product("Clothing");
        assert!(Selection::from("Clothing").matches(&shirt));
        assert!(!Selection::from("clothing").matches(&shirt));
        assert!(!Selection::from(" Clothing").matches(&shirt));
        assert!(!Selection::from("Cloth").matches(&shirt));
    }

    #[test]
    fn lowercase_all_is_a_category() {
        // Only the exact label is synthetic
        assert_eq!(
            Selection::from("all"),
            Selection::Category("all".to_string())
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Selection::All.to_string(), "All");
        assert_eq!(Selection::from("Electronics").to_string(), "Electronics");
    }

    #[test]
    fn control_style_resolves_against_current() {
        let all = Selection::All;
        let clothing = Selection::from("Clothing");
        assert_eq!(ControlStyle::resolve(&all, &all), ControlStyle::Selected);
        assert_eq!(
            ControlStyle::resolve(&clothing, &all),
            ControlStyle::Unselected
        );
        assert_eq!(ControlStyle::Selected.class(), "category-btn selected");
        assert_eq!(ControlStyle::Unselected.class(), "category-btn unselected");
    }
}
