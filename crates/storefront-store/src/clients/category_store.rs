use crate::model::{Category, CategoryCreate, CategoryUpdate};
use crate::stores::categories::CategoryQuery;
use async_trait::async_trait;
use resource_store::{RequestError, StoreClient, TypedStoreClient};
use tracing::{debug, instrument};

/// Client for the category container.
#[derive(Clone)]
pub struct CategoryStore {
    inner: StoreClient<Category>,
}

impl CategoryStore {
    pub fn new(inner: StoreClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TypedStoreClient<Category> for CategoryStore {
    fn inner(&self) -> &StoreClient<Category> {
        &self.inner
    }
}

impl CategoryStore {
    /// Creates a category from a multipart form (name, optional description
    /// and image).
    #[instrument(skip(self, params))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<(), RequestError> {
        debug!(name = %params.name, "Dispatching create");
        self.inner.create(params).await
    }

    /// Updates a category; every field of the form is optional.
    #[instrument(skip(self, params))]
    pub async fn update_category(
        &self,
        id: String,
        params: CategoryUpdate,
    ) -> Result<(), RequestError> {
        debug!(%id, "Dispatching update");
        self.inner.update(id, params).await
    }

    /// Loads one page of a category's products into the container's metadata.
    #[instrument(skip(self))]
    pub async fn fetch_products(
        &self,
        category_id: String,
        page: u32,
        limit: u32,
    ) -> Result<(), RequestError> {
        debug!("Dispatching product page fetch");
        self.inner
            .query(CategoryQuery::ProductsPage {
                category_id,
                page,
                limit,
            })
            .await
    }
}
