use crate::model::DashboardReport;
use crate::stores::dashboard::DashboardQuery;
use async_trait::async_trait;
use resource_store::{RequestError, StoreClient, TypedStoreClient};
use tracing::{debug, instrument};

/// Client for the admin dashboard container.
#[derive(Clone)]
pub struct DashboardStore {
    inner: StoreClient<DashboardReport>,
}

impl DashboardStore {
    pub fn new(inner: StoreClient<DashboardReport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TypedStoreClient<DashboardReport> for DashboardStore {
    fn inner(&self) -> &StoreClient<DashboardReport> {
        &self.inner
    }
}

impl DashboardStore {
    /// Loads the aggregate report into the container's `selected` slot.
    #[instrument(skip(self))]
    pub async fn fetch_report(&self) -> Result<(), RequestError> {
        debug!("Dispatching dashboard fetch");
        self.inner.query(DashboardQuery::Fetch).await
    }
}
