//! The product catalog and the grid's filtering projection.
//!
//! A [`Catalog`] is fixed once constructed: there is no mutation API and
//! clones share the same storage, so components can hold their own copy
//! for the lifetime of the page.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::types::{Product, Selection};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id; ids key the card list
    #[error("duplicate product id {0}")]
    DuplicateId(u64),
    /// The JSON document is not an array of products
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, immutable list of products.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids. Order is kept as given.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        debug!(products = products.len(), "catalog built");
        Ok(Self {
            products: products.into(),
        })
    }

    /// Parse a JSON array of products.
    ///
    /// ```rust
    /// use storefront::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[
    ///     {"id": 1, "name": "Tee", "image": "tee.png", "price": "$10", "category": "Clothing"}
    /// ]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The storefront's fixed in-memory product list.
    pub fn builtin() -> Self {
        let products = BUILTIN
            .iter()
            .map(|&(id, name, price, category)| Product {
                id,
                name: name.to_string(),
                image: format!(
                    "https://placehold.co/400x300?text={}",
                    name.replace(' ', "+")
                ),
                price: price.to_string(),
                category: category.to_string(),
            })
            .collect();
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products visible under `selection`, in catalog order.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn visible(&self, selection: &Selection) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| selection.matches(product))
            .cloned()
            .collect()
    }

    /// Selector labels: `All`, then each category in first-appearance order.
    pub fn selector_labels(&self) -> Vec<Selection> {
        let mut seen = HashSet::new();
        let categories = self
            .products
            .iter()
            .map(|product| Selection::from(product.category.as_str()))
            .filter(|label| *label != Selection::All && seen.insert(label.clone()));
        std::iter::once(Selection::All).chain(categories).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// (id, name, price, category)
const BUILTIN: &[(u64, &str, &str, &str)] = &[
    (1, "Classic Denim Jacket", "$89.99", "Clothing"),
    (2, "Wireless Headphones", "$199.99", "Electronics"),
    (3, "Cotton Crew Tee", "$24.99", "Clothing"),
    (4, "Smart Watch", "$249.99", "Electronics"),
    (5, "Wool Overcoat", "$179.99", "Clothing"),
    (6, "Bluetooth Speaker", "$79.99", "Electronics"),
    (7, "Slim Fit Chinos", "$59.99", "Clothing"),
    (8, "4K Action Camera", "$299.99", "Electronics"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            image: format!("https://example.test/{id}.png"),
            price: "$1.00".into(),
            category: category.into(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product(1, "Clothing"),
            product(2, "Electronics"),
            product(3, "Clothing"),
        ])
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn filters_by_category_in_catalog_order() {
        let catalog = sample();
        assert_eq!(ids(&catalog.visible(&Selection::from("Clothing"))), vec![1, 3]);
        assert_eq!(ids(&catalog.visible(&Selection::from("Electronics"))), vec![2]);
    }

    #[test]
    fn absent_category_is_empty() {
        assert!(sample().visible(&Selection::from("Sports")).is_empty());
    }

    #[test]
    fn all_yields_full_catalog_after_any_selection() {
        let catalog = sample();
        for previous in ["Clothing", "Electronics", "Sports"] {
            let _ = catalog.visible(&Selection::from(previous));
            assert_eq!(catalog.visible(&Selection::All), catalog.products().to_vec());
        }
    }

    #[test]
    fn visible_set_matches_definition() {
        let catalog = Catalog::builtin();
        for selection in catalog
            .selector_labels()
            .into_iter()
            .chain([Selection::from("Sports")])
        {
            let expected: Vec<Product> = catalog
                .products()
                .iter()
                .filter(|p| selection == Selection::All || Selection::from(p.category.as_str()) == selection)
                .cloned()
                .collect();
            assert_eq!(catalog.visible(&selection), expected);
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(7, "Clothing"), product(7, "Electronics")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(7)));
        assert_eq!(err.to_string(), "duplicate product id 7");
    }

    #[test]
    fn selector_labels_follow_first_appearance() {
        let catalog = Catalog::new(vec![
            product(1, "Electronics"),
            product(2, "Clothing"),
            product(3, "Electronics"),
        ])
        .unwrap();
        assert_eq!(
            catalog.selector_labels(),
            vec![
                Selection::All,
                Selection::from("Electronics"),
                Selection::from("Clothing"),
            ]
        );
    }

    #[test]
    fn category_named_all_does_not_repeat_the_all_label() {
        let catalog = Catalog::new(vec![
            product(1, "All"),
            product(2, "Clothing"),
            product(3, "All"),
        ])
        .unwrap();
        assert_eq!(
            catalog.selector_labels(),
            vec![Selection::All, Selection::from("Clothing")]
        );
    }

    #[test]
    fn builtin_has_unique_ids_and_both_categories() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.products().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(
            builtin.selector_labels(),
            vec![
                Selection::All,
                Selection::from("Clothing"),
                Selection::from("Electronics"),
            ]
        );
    }

    #[test]
    fn parses_json_catalog() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": 10, "name": "Tee", "image": "tee.png", "price": "$10", "category": "Clothing"},
                {"id": 11, "name": "Phone", "image": "phone.png", "price": "$500", "category": "Electronics"}
            ]"#,
        )
        .unwrap();
        assert_eq!(ids(catalog.products()), vec![10, 11]);
        assert_eq!(catalog.products()[1].price, "$500");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
