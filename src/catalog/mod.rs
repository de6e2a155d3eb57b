//! Product listing view-model
//!
//! Turns the raw product collection plus the shopper's filters and sort
//! selection into the list shown on the products page.

pub mod facets;
pub mod pipeline;

pub use facets::{FacetOptions, facet_options};
pub use pipeline::{apply, dedup_by_id, matches, order, requires_manual_order};

use crate::core::{FilterCriteria, Product, SortMode};
use serde::Serialize;

/// A computed listing together with its summary counts
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub products: Vec<Product>,
    /// Number of records shown after filtering
    pub shown: usize,
    /// Size of the raw collection
    pub total: usize,
    pub sort: SortMode,
}

impl Listing {
    pub fn build(products: &[Product], criteria: &FilterCriteria, sort: SortMode) -> Self {
        let listing = apply(products, criteria, &sort);
        Self {
            shown: listing.len(),
            total: products.len(),
            products: listing,
            sort,
        }
    }
}
