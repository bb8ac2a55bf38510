// src/bin/seed.rs
use anyhow::Result;
use bazaar_core::application::commands::seed::CatalogSeeder;
use bazaar_core::config::AppConfig;
use bazaar_core::infrastructure::{
    database,
    repositories::{PostgresProductWriteRepository, PostgresVendorWriteRepository},
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let seeder = CatalogSeeder::new(
        Arc::new(PostgresVendorWriteRepository::new(pool.clone())),
        Arc::new(PostgresProductWriteRepository::new(pool.clone())),
        Arc::new(SystemClock),
    );
    let report = seeder.seed().await?;

    println!("vendor: {} ({})", report.vendor.name, report.vendor.slug);
    for product in &report.products {
        println!("product: {} ({}) {} cents", product.title, product.slug, product.price_cents);
    }

    pool.close().await;
    Ok(())
}
