//! Showroom Example
//!
//! Runs the storefront against an in-memory catalog seeded with a small
//! collection, one admin and one shopper:
//! - Listing with facet filters and sort modes
//! - Brand showcase grid
//! - Admin duplicate cleanup (the seed contains one duplicate pair)
//!
//! Set `STOREFRONT_CONFIG` to a YAML file to override the defaults and
//! `RUST_LOG` to change the log level.

use anyhow::Result;
use chrono::{Duration, Utc};
use serde_json::json;
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => StorefrontConfig::from_yaml_file(&path)?,
        Err(_) => StorefrontConfig::default(),
    };
    let addr = config.listen_addr.clone();

    let store = InMemoryCatalogStore::new();
    populate_catalog(&store)?;

    let users = InMemoryUserDirectory::new();
    users.put_user("curator", json!({ "isAdmin": true, "name": "Curator" }))?;
    users.put_user("buyer", json!({ "isAdmin": false, "name": "Buyer" }))?;

    let sessions = InMemorySessionProvider::new();
    let admin_token =
        sessions.sign_in(SessionUser::new("curator").with_email("curator@example.com"))?;
    let buyer_token =
        sessions.sign_in(SessionUser::new("buyer").with_email("buyer@example.com"))?;

    tracing::info!(token = %admin_token, "admin session ready");
    tracing::info!(token = %buyer_token, "shopper session ready");

    println!("\n🌐 Showroom running on http://{}", addr);
    println!("\n  GET    /products?categories=Kurta&sort=price-low");
    println!("  GET    /products/facets");
    println!("  GET    /brands");
    println!("  GET    /auth/session              (Authorization: Bearer <token>)");
    println!("  POST   /auth/logout");
    println!("  GET    /admin/duplicates          (admin token)");
    println!("  DELETE /admin/products/{{id}}       (admin token)");

    ServerBuilder::new()
        .with_config(config)
        .with_catalog_store(store)
        .with_session_provider(sessions)
        .with_admin_resolver(users)
        .serve(Some(&addr))
        .await
}

/// Seed products and brands
fn populate_catalog(store: &InMemoryCatalogStore) -> Result<()> {
    let now = Utc::now();
    let days_ago = |days: i64| CreatedAt::Epoch((now - Duration::days(days)).timestamp() as f64);

    let products = vec![
        Product::new("kr-101", "Anarkali Kurta", "Lasoon")
            .with_category("Kurta")
            .with_color("Maroon")
            .with_price(1899.0)
            .with_sizes(["S", "M", "L"])
            .with_position(1)
            .with_created_at(days_ago(30))
            .with_image("/products/kr-101.jpg"),
        Product::new("sr-204", "Banarasi Saree", "Princy")
            .with_category("Saree")
            .with_color("Gold")
            .with_price(6499.0)
            .with_sizes(["Free"])
            .with_created_at(days_ago(2)),
        Product::new("kr-102", "Anarkali Kurta", "Lasoon")
            .with_category("Kurta")
            .with_color("Maroon")
            .with_price(1899.0)
            .with_sizes(["M"])
            .with_created_at(days_ago(1)),
        Product::new("lh-310", "Bridal Lehenga", "Pampara")
            .with_category("Lehenga")
            .with_color("Red")
            .with_price(9800.0)
            .with_sizes(["M", "L"])
            .with_created_at(days_ago(12)),
        Product::new("dp-050", "Chiffon Dupatta", "Soulwin")
            .with_category("Dupatta")
            .with_color("Teal")
            .with_price(499.0)
            .with_sizes(["Free"])
            .with_created_at(days_ago(5)),
        Product::new("cs-777", "Co-ord Set", "Belly 11")
            .with_category("Co-ord")
            .with_color("Black")
            .with_price(2450.0)
            .with_sizes(["XS", "S", "M"])
            .with_position(2)
            .with_created_at(days_ago(8)),
    ];

    for product in products {
        store.insert_product(product)?;
    }

    let mut lasoon = Brand::new("lasoon", "Lasoon");
    lasoon.seasons = vec!["Festive 2025".to_string()];
    store.insert_brand(lasoon)?;
    store.insert_brand(Brand::new("princy", "Princy"))?;
    store.insert_brand(Brand::new("pampara", "Pampara"))?;
    store.insert_brand(Brand::new("soulwin", "Soulwin"))?;
    store.insert_brand(Brand::new("belly-11", "Belly 11"))?;

    Ok(())
}
