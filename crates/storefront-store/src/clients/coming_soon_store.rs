use crate::model::{ComingSoonSection, ComingSoonSectionCreate, ComingSoonSectionUpdate};
use crate::stores::coming_soon::ComingSoonQuery;
use async_trait::async_trait;
use resource_store::{RequestError, StoreClient, TypedStoreClient};
use tracing::{debug, instrument};

/// Client for the coming-soon container.
#[derive(Clone)]
pub struct ComingSoonStore {
    inner: StoreClient<ComingSoonSection>,
}

impl ComingSoonStore {
    pub fn new(inner: StoreClient<ComingSoonSection>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TypedStoreClient<ComingSoonSection> for ComingSoonStore {
    fn inner(&self) -> &StoreClient<ComingSoonSection> {
        &self.inner
    }
}

impl ComingSoonStore {
    /// Creates a section (admin only).
    #[instrument(skip(self, params))]
    pub async fn create_section(
        &self,
        params: ComingSoonSectionCreate,
    ) -> Result<(), RequestError> {
        debug!(title = %params.title, "Dispatching create");
        self.inner.create(params).await
    }

    /// Updates a section (admin only).
    #[instrument(skip(self, params))]
    pub async fn update_section(
        &self,
        id: String,
        params: ComingSoonSectionUpdate,
    ) -> Result<(), RequestError> {
        debug!(%id, "Dispatching update");
        self.inner.update(id, params).await
    }

    /// Loads the publicly visible sections into the container's metadata.
    #[instrument(skip(self))]
    pub async fn fetch_active(&self) -> Result<(), RequestError> {
        debug!("Dispatching active-section fetch");
        self.inner.query(ComingSoonQuery::Active).await
    }
}
