use crate::model::{Review, ReviewCreate, ReviewUpdate};
use crate::stores::reviews::ReviewQuery;
use async_trait::async_trait;
use resource_store::{RequestError, StoreClient, TypedStoreClient};
use tracing::{debug, instrument};

/// Client for the review container.
#[derive(Clone)]
pub struct ReviewStore {
    inner: StoreClient<Review>,
}

impl ReviewStore {
    pub fn new(inner: StoreClient<Review>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TypedStoreClient<Review> for ReviewStore {
    fn inner(&self) -> &StoreClient<Review> {
        &self.inner
    }
}

impl ReviewStore {
    /// Submits a new review for a product.
    #[instrument(skip(self, params))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<(), RequestError> {
        debug!(product_id = %params.product_id, "Dispatching create");
        self.inner.create(params).await
    }

    /// Edits the caller's own review.
    #[instrument(skip(self, params))]
    pub async fn update_review(
        &self,
        id: String,
        params: ReviewUpdate,
    ) -> Result<(), RequestError> {
        debug!(%id, "Dispatching update");
        self.inner.update(id, params).await
    }

    /// Loads a product's reviews plus its rating summary into the container's
    /// metadata.
    #[instrument(skip(self))]
    pub async fn fetch_product_reviews(&self, product_id: String) -> Result<(), RequestError> {
        debug!("Dispatching product review fetch");
        self.inner
            .query(ReviewQuery::ProductReviews { product_id })
            .await
    }

    /// Loads the authenticated user's own reviews.
    #[instrument(skip(self))]
    pub async fn fetch_my_reviews(&self) -> Result<(), RequestError> {
        debug!("Dispatching own-review fetch");
        self.inner.query(ReviewQuery::MyReviews).await
    }

    /// Flips a review's verified flag (admin only).
    #[instrument(skip(self))]
    pub async fn toggle_verification(&self, id: String) -> Result<(), RequestError> {
        debug!(%id, "Dispatching verification toggle");
        self.inner.query(ReviewQuery::ToggleVerification { id }).await
    }
}
