//! Demo binary: connects the store system to a live API and walks through a
//! few read operations.
//!
//! ```bash
//! API_BASE_URL=http://localhost:5000/api RUST_LOG=info cargo run
//! ```

use resource_store::{setup_tracing, TypedStoreClient};
use storefront_store::config::StoreConfig;
use storefront_store::lifecycle::StoreSystem;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv::dotenv().ok();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env().map_err(|e| e.to_string())?;
    info!(base_url = %config.api_base_url, "Starting store system");

    let system = StoreSystem::connect(&config);

    let span = tracing::info_span!("category_refresh");
    let categories = async {
        info!("Loading categories");
        system
            .categories
            .refresh()
            .await
            .map_err(|e| e.to_string())?;
        system.categories.snapshot().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        count = categories.items.len(),
        error = ?categories.error,
        "Category list loaded"
    );

    let span = tracing::info_span!("active_sections");
    async {
        info!("Loading active home sections");
        system
            .home_sections
            .fetch_active()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    if config.auth_token.is_some() {
        let span = tracing::info_span!("dashboard_fetch");
        let dashboard = async {
            info!("Loading admin dashboard");
            system
                .dashboard
                .fetch_report()
                .await
                .map_err(|e| e.to_string())?;
            system.dashboard.snapshot().await.map_err(|e| e.to_string())
        }
        .instrument(span)
        .await?;

        match dashboard.selected {
            Some(report) => info!(
                products = report.stats.total_products,
                orders = report.stats.total_orders,
                "Dashboard loaded"
            ),
            None => info!(error = ?dashboard.error, "Dashboard unavailable"),
        }
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
