//! Brand showcase grid
//!
//! Each brand becomes a card linking to its brand page. Curated artwork
//! configured per brand id takes precedence over the image stored on the
//! brand document.

use crate::core::Brand;
use indexmap::IndexMap;
use serde::Serialize;

/// Seconds between the entrance animations of consecutive cards
pub const CARD_STAGGER_SECS: f64 = 0.05;

/// Artwork shipped with the storefront, keyed by brand id
pub fn default_brand_images() -> IndexMap<String, String> {
    [
        ("urja-wacchi", "/brands/urjaa.jpg"),
        ("lasoon", "/brands/lasoon.jpeg"),
        ("radhika", "/brands/radhika fashion.jpg"),
        ("avangard", "/brands/wachi.jpg"),
        ("b-52", "/brands/b-52 fashion.jpg"),
        ("oakberry", "/brands/lasoon feminine.jpg"),
        ("domex-club", "/brands/e-zennia.jpg"),
        ("e-zinna", "/brands/e-zennia.jpg"),
        ("belly-11", "/brands/belly-11.jpg"),
        ("miss-eney", "/brands/soulwin.jpeg"),
        ("princy", "/brands/amba jee.jpeg"),
        ("pampara", "/brands/pampara.jpg"),
        ("5-rivers", "/brands/5 rivers .jpg"),
        ("amba-jee", "/brands/amba jee.jpeg"),
        ("soulwin", "/brands/soulwin.jpeg"),
    ]
    .into_iter()
    .map(|(id, path)| (id.to_string(), path.to_string()))
    .collect()
}

/// One tile of the showcase grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandCard {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub seasons: Vec<String>,
    /// Link to the brand page
    pub href: String,
    pub animation_delay_secs: f64,
}

/// Build the showcase cards in brand order
pub fn showcase(brands: &[Brand], images: &IndexMap<String, String>) -> Vec<BrandCard> {
    brands
        .iter()
        .enumerate()
        .map(|(idx, brand)| BrandCard {
            id: brand.id.clone(),
            name: brand.name.clone(),
            image: images
                .get(&brand.id)
                .cloned()
                .or_else(|| brand.image.clone()),
            seasons: brand.seasons.clone(),
            href: format!("/brands/{}", brand.id),
            animation_delay_secs: idx as f64 * CARD_STAGGER_SECS,
        })
        .collect()
}
