//! Filter, deduplicate and order the product listing
//!
//! [`apply`] runs three total, side-effect-free steps over a working copy of
//! the raw collection:
//!
//! 1. drop records without an id and keep the first record for each id,
//! 2. keep records passing every facet (category, brand, color, size) and
//!    whose price lies inside the inclusive price range,
//! 3. order the survivors (see [`order`]).
//!
//! All sorts are stable, so records that compare equal keep store order.

use crate::core::{FilterCriteria, Product, SortMode};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Produce the listing for a collection, a set of filters and a sort mode
pub fn apply(products: &[Product], criteria: &FilterCriteria, sort: &SortMode) -> Vec<Product> {
    let mut listing = dedup_by_id(products);
    listing.retain(|product| matches(criteria, product));
    order(&mut listing, sort);
    listing
}

/// Keep the first record for each identifier, dropping records without one
pub fn dedup_by_id(products: &[Product]) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| p.is_valid() && seen.insert(p.id.as_str()))
        .cloned()
        .collect()
}

fn facet_accepts(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// Whether a record passes every facet of the criteria
///
/// Facets are checked in listing order: category, brand, color, size, then
/// price. A record passes the size facet when any of its sizes is selected.
pub fn matches(criteria: &FilterCriteria, product: &Product) -> bool {
    facet_accepts(&criteria.categories, &product.category)
        && facet_accepts(&criteria.brands, &product.brand)
        && facet_accepts(&criteria.colors, &product.color)
        && (criteria.sizes.is_empty()
            || product
                .sizes
                .iter()
                .any(|size| criteria.sizes.contains(size)))
        && criteria.price_range.contains(product.price)
}

/// Whether the listing is ordered by manual position
///
/// Manual ordering applies when it is the selected mode, and also whenever
/// any record in the listing carries a position: an admin-pinned order
/// always wins over the shopper's sort selection.
pub fn requires_manual_order(products: &[Product], sort: &SortMode) -> bool {
    *sort == SortMode::Manual || products.iter().any(|p| p.position.is_some())
}

/// Manual order: position ascending, unpositioned last, newest first on ties
///
/// Records without a position sort after every positioned record, whatever
/// the position value.
pub fn cmp_manual(a: &Product, b: &Product) -> Ordering {
    let by_position = match (a.position, b.position) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_position.then_with(|| a.cmp_newest(b))
}

/// Order a listing in place
pub fn order(products: &mut [Product], sort: &SortMode) {
    if requires_manual_order(products, sort) {
        products.sort_by(cmp_manual);
        return;
    }

    match sort {
        SortMode::Newest => products.sort_by(Product::cmp_newest),
        SortMode::PriceAscending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDescending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        // Manual is handled above
        SortMode::Manual | SortMode::Popularity | SortMode::Unrecognized(_) => {}
    }
}
