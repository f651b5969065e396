//! Catalog Client - demo consumer
//!
//! Stands in for the presentation layer: fetches the product list from the
//! configured backend, sorts it client-side with the key given as the first
//! argument (`name`, `count-asc`, `count-desc`) and prints the result.

use anyhow::Result;
use catalog_client::{sort_products, Catalog, ProductsClient, SortOption};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ProductsClient::from_env();
    tracing::info!("catalog backend at {}", client.base_url());

    let mut catalog = Catalog::new(client);
    catalog.fetch_products().await?;

    // Unknown or absent sort keys fall back to backend order.
    let products = match std::env::args().nth(1).as_deref().and_then(SortOption::parse) {
        Some(by) => sort_products(catalog.state().products(), by),
        None => catalog.state().products().to_vec(),
    };

    for p in &products {
        println!(
            "{:<8} {:<28} count={:<5} {}x{}  {}",
            p.id, p.name, p.count, p.size.width, p.size.height, p.weight
        );
    }
    println!("{} product(s)", products.len());
    Ok(())
}
