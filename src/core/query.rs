//! Listing query parameters, filter criteria and sort modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 10_000.0;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds are inclusive
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// One of the set-valued filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Categories,
    Brands,
    Colors,
    Sizes,
}

/// User-selected filters for the product listing
///
/// Each set-valued facet accepts a record when the set is empty or when the
/// record's value is one of the selected values. Facets combine with AND.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that accept everything within the given price bounds
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Default::default()
        }
    }

    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Categories => &self.categories,
            Facet::Brands => &self.brands,
            Facet::Colors => &self.colors,
            Facet::Sizes => &self.sizes,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Categories => &mut self.categories,
            Facet::Brands => &mut self.brands,
            Facet::Colors => &mut self.colors,
            Facet::Sizes => &mut self.sizes,
        }
    }

    /// Check or uncheck one facet value
    ///
    /// Checking appends the value; unchecking removes every copy of it.
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>, checked: bool) {
        let value = value.into();
        let values = self.values_mut(facet);
        if checked {
            values.push(value);
        } else {
            values.retain(|v| *v != value);
        }
    }

    /// Reset every facet and the price range to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no facet restricts the listing
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.brands.is_empty()
            && self.colors.is_empty()
            && self.sizes.is_empty()
            && self.price_range == PriceRange::default()
    }
}

/// Listing order selected by the shopper
///
/// Parsed from the storefront's select values. Unknown values are kept as
/// [`SortMode::Unrecognized`] and leave the listing order untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    /// Admin-assigned position, newest first within a position
    #[default]
    Manual,
    Newest,
    /// Keeps store order
    Popularity,
    PriceAscending,
    PriceDescending,
    Name,
    Unrecognized(String),
}

impl SortMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "manual" => SortMode::Manual,
            "newest" => SortMode::Newest,
            "popularity" => SortMode::Popularity,
            "price-low" => SortMode::PriceAscending,
            "price-high" => SortMode::PriceDescending,
            "name" => SortMode::Name,
            other => SortMode::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Manual => "manual",
            SortMode::Newest => "newest",
            SortMode::Popularity => "popularity",
            SortMode::PriceAscending => "price-low",
            SortMode::PriceDescending => "price-high",
            SortMode::Name => "name",
            SortMode::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        SortMode::parse(&value)
    }
}

impl From<SortMode> for String {
    fn from(value: SortMode) -> Self {
        value.as_str().to_string()
    }
}

/// Query string of the product listing endpoint
///
/// List-valued facets are comma separated and each value is trimmed, so a
/// facet value that itself contains a comma, or starts or ends with
/// whitespace, cannot be selected through the query string. Missing
/// parameters fall back to the configured defaults.
///
/// # Example
/// ```text
/// GET /products?categories=Kurta,Saree&sizes=M&max_price=2500&sort=price-low
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CatalogQuery {
    pub categories: Option<String>,
    pub brands: Option<String>,
    pub colors: Option<String>,
    pub sizes: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<String>,
}

fn split_list(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl CatalogQuery {
    /// Build filter criteria, filling unspecified price bounds from `defaults`
    pub fn criteria(&self, defaults: PriceRange) -> FilterCriteria {
        FilterCriteria {
            categories: split_list(&self.categories),
            brands: split_list(&self.brands),
            colors: split_list(&self.colors),
            sizes: split_list(&self.sizes),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(defaults.min),
                self.max_price.unwrap_or(defaults.max),
            ),
        }
    }

    /// Requested sort mode, or `default` when none was given
    pub fn sort_mode(&self, default: &SortMode) -> SortMode {
        self.sort
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(SortMode::parse)
            .unwrap_or_else(|| default.clone())
    }
}
