//! Distinct facet values offered in the filter sidebar

use crate::core::{Facet, Product};
use indexmap::IndexSet;
use serde::Serialize;

/// Selectable values per facet, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

impl FacetOptions {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Categories => &self.categories,
            Facet::Brands => &self.brands,
            Facet::Colors => &self.colors,
            Facet::Sizes => &self.sizes,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Collect the options from the raw collection
///
/// Options come from every record, including ones the current filters hide,
/// so a shopper can always widen a selection.
pub fn facet_options(products: &[Product]) -> FacetOptions {
    FacetOptions {
        categories: distinct(products.iter().map(|p| &p.category)),
        brands: distinct(products.iter().map(|p| &p.brand)),
        colors: distinct(products.iter().map(|p| &p.color)),
        sizes: distinct(products.iter().flat_map(|p| p.sizes.iter())),
    }
}
