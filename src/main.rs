use std::path::PathBuf;

use anyhow::Context;
use studentstay::accommodations::{AccommodationRepository, JsonCatalogRepository, PricingService};
use studentstay::config::{init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config.app.log_level, config.app.log_format);

    tracing::info!("Starting studentstay room pricing");
    tracing::info!("Environment: {}", config.app.env);

    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.pricing.catalog_path.clone())
        .context("No catalog given: pass a path or set CATALOG_PATH")?;

    let clock = config.pricing.clock()?;
    let today = clock.today();
    tracing::info!(%today, offset = %clock.offset(), "Pricing for business date");

    let repository = JsonCatalogRepository::new(catalog_path);
    let accommodations = repository
        .list()
        .await
        .with_context(|| format!("Failed to load catalog {}", repository.path().display()))?;

    let listings = PricingService::default().room_listings(&accommodations, today)?;

    println!("{}", serde_json::to_string_pretty(&listings)?);

    Ok(())
}
