//! Static product catalog.
//!
//! The catalog is fixed at compile time and never mutated. Products are kept
//! in declaration order, which is also the order used for listing and for
//! positional lookup.

use std::sync::LazyLock;

use online_store_core::Price;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
}

static CATALOG: LazyLock<[Product; 4]> = LazyLock::new(|| {
    [
        Product {
            id: "1",
            name: "TV",
            description: "Best TV",
            price: Price::whole(500),
        },
        Product {
            id: "2",
            name: "iPhone",
            description: "Best iPhone",
            price: Price::whole(1200),
        },
        Product {
            id: "3",
            name: "Chromecast",
            description: "Best Chromecast",
            price: Price::whole(70),
        },
        Product {
            id: "4",
            name: "Glasses",
            description: "Best Glasses",
            price: Price::whole(30),
        },
    ]
});

/// All catalog products, in declaration order.
#[must_use]
pub fn products() -> &'static [Product] {
    CATALOG.as_slice()
}

/// Look up a product by its 1-based position in the catalog.
///
/// Returns `None` when `position` is not a non-negative integer, is zero, or
/// is past the end of the catalog. The position is NOT matched against
/// [`Product::id`].
#[must_use]
pub fn find_by_position(position: &str) -> Option<&'static Product> {
    let index = position.trim().parse::<usize>().ok()?.checked_sub(1)?;
    products().get(index)
}
