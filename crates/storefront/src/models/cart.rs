//! Cart products and session-held cart contents.
//!
//! The cart offers its own small product dictionary, separate from the
//! [`catalog`](super::catalog). What a visitor has added is tracked by
//! [`CartProductData`], a set of product-id strings kept in the session.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use online_store_core::{CartProductId, Price};

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartProduct {
    pub id: CartProductId,
    pub name: &'static str,
    pub price: Price,
}

static CART_PRODUCTS: LazyLock<[CartProduct; 2]> = LazyLock::new(|| {
    [
        CartProduct {
            id: CartProductId::new(121),
            name: "Tv samsung",
            price: Price::whole(1000),
        },
        CartProduct {
            id: CartProductId::new(11),
            name: "Iphone",
            price: Price::whole(2000),
        },
    ]
});

/// All products offered by the cart, in dictionary order.
#[must_use]
pub fn cart_products() -> &'static [CartProduct] {
    CART_PRODUCTS.as_slice()
}

/// Product IDs a visitor has added to the cart.
///
/// Each key maps to itself. IDs are stored exactly as received, so IDs that
/// match no cart product are kept but never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartProductData(BTreeMap<String, String>);

impl CartProductData {
    /// Record `product_id` as added. Adding the same ID again changes nothing.
    pub fn add(&mut self, product_id: &str) {
        self.0
            .insert(product_id.to_owned(), product_id.to_owned());
    }

    /// Whether `product_id` has been added.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.0.contains_key(product_id)
    }

    /// Number of distinct IDs recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The products from `products` whose ID has been added, in the order of
    /// `products`.
    #[must_use]
    pub fn items_in<'a>(&self, products: &'a [CartProduct]) -> Vec<&'a CartProduct> {
        products
            .iter()
            .filter(|product| self.contains(&product.id.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_products() {
        let ids: Vec<_> = cart_products().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, [121, 11]);
    }

    #[test]
    fn test_empty_cart_has_no_items() {
        let data = CartProductData::default();
        assert!(data.is_empty());
        assert!(data.items_in(cart_products()).is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut data = CartProductData::default();
        data.add("121");
        data.add("121");
        assert_eq!(data.len(), 1);
        assert!(data.contains("121"));
    }

    #[test]
    fn test_items_in_intersects_with_products() {
        let mut data = CartProductData::default();
        data.add("121");

        let items = data.items_in(cart_products());
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|p| p.name), Some("Tv samsung"));
    }

    #[test]
    fn test_items_in_keeps_dictionary_order() {
        let mut data = CartProductData::default();
        data.add("11");
        data.add("121");

        let names: Vec<_> = data
            .items_in(cart_products())
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Tv samsung", "Iphone"]);
    }

    #[test]
    fn test_unknown_ids_are_kept_but_not_shown() {
        let mut data = CartProductData::default();
        data.add("999");

        assert!(data.contains("999"));
        assert!(data.items_in(cart_products()).is_empty());
    }

    #[test]
    fn test_serializes_as_map() {
        let mut data = CartProductData::default();
        data.add("121");

        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json, serde_json::json!({ "121": "121" }));

        let back: CartProductData = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, data);
    }
}
