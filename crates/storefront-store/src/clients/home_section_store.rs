use crate::model::{HomeSection, HomeSectionCreate, HomeSectionUpdate};
use crate::stores::home_sections::HomeSectionQuery;
use async_trait::async_trait;
use resource_store::{RequestError, StoreClient, TypedStoreClient};
use tracing::{debug, instrument};

/// Client for the home-section container.
#[derive(Clone)]
pub struct HomeSectionStore {
    inner: StoreClient<HomeSection>,
}

impl HomeSectionStore {
    pub fn new(inner: StoreClient<HomeSection>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TypedStoreClient<HomeSection> for HomeSectionStore {
    fn inner(&self) -> &StoreClient<HomeSection> {
        &self.inner
    }
}

impl HomeSectionStore {
    /// Creates a section (admin only).
    #[instrument(skip(self, params))]
    pub async fn create_section(&self, params: HomeSectionCreate) -> Result<(), RequestError> {
        debug!(title = %params.title, "Dispatching create");
        self.inner.create(params).await
    }

    /// Updates a section (admin only).
    #[instrument(skip(self, params))]
    pub async fn update_section(
        &self,
        id: String,
        params: HomeSectionUpdate,
    ) -> Result<(), RequestError> {
        debug!(%id, "Dispatching update");
        self.inner.update(id, params).await
    }

    /// Loads the publicly visible sections into the container's metadata.
    #[instrument(skip(self))]
    pub async fn fetch_active(&self) -> Result<(), RequestError> {
        debug!("Dispatching active-section fetch");
        self.inner.query(HomeSectionQuery::Active).await
    }
}
