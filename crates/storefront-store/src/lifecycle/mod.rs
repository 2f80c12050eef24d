//! Runtime orchestration for the store containers.

use crate::clients::{
    CategoryStore, ComingSoonStore, DashboardStore, HomeSectionStore, ReviewStore,
};
use crate::config::StoreConfig;
use crate::stores;
use resource_store::{ApiClient, Backend};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for all resource containers.
///
/// `StoreSystem` spawns one container task per resource against a shared
/// [`Backend`] and hands out the typed clients. Dropping the system's clients
/// closes the containers' channels, which is how shutdown works.
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::from_env()?;
/// let system = StoreSystem::connect(&config);
///
/// system.categories.refresh().await?;
/// let state = system.categories.snapshot().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    /// Client for the category container.
    pub categories: CategoryStore,

    /// Client for the review container.
    pub reviews: ReviewStore,

    /// Client for the home-section container.
    pub home_sections: HomeSectionStore,

    /// Client for the coming-soon container.
    pub coming_soon: ComingSoonStore,

    /// Client for the admin dashboard container.
    pub dashboard: DashboardStore,

    /// Task handles for all running containers (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every container against the given backend.
    ///
    /// All containers share the same transport. Each one runs in its own
    /// Tokio task and owns its slice of state exclusively.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let (category_store, categories) = stores::categories::new();
        let (review_store, reviews) = stores::reviews::new();
        let (home_store, home_sections) = stores::home_sections::new();
        let (coming_store, coming_soon) = stores::coming_soon::new();
        let (dashboard_store, dashboard) = stores::dashboard::new();

        let handles = vec![
            tokio::spawn(category_store.run(backend.clone())),
            tokio::spawn(review_store.run(backend.clone())),
            tokio::spawn(home_store.run(backend.clone())),
            tokio::spawn(coming_store.run(backend.clone())),
            tokio::spawn(dashboard_store.run(backend)),
        ];

        Self {
            categories,
            reviews,
            home_sections,
            coming_soon,
            dashboard,
            handles,
        }
    }

    /// Builds the production HTTP backend from configuration and spawns the
    /// containers against it.
    pub fn connect(config: &StoreConfig) -> Self {
        let mut client = ApiClient::new(config.api_base_url.clone());
        if let Some(token) = &config.auth_token {
            client = client.with_token(token.clone());
        }
        Self::new(Arc::new(client))
    }

    /// Gracefully shuts down every container.
    ///
    /// Dropping the clients closes their channels; each container drains its
    /// in-flight operations and exits its event loop. Returns an error if any
    /// container task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.categories);
        drop(self.reviews);
        drop(self.home_sections);
        drop(self.coming_soon);
        drop(self.dashboard);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Container task failed: {:?}", e);
                return Err(format!("Container task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
