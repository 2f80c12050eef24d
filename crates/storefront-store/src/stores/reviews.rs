//! # Review Container
//!
//! The review container mirrors two listings at once: `items` is the admin
//! moderation list (`GET /reviews/admin/all`), while the per-product view
//! (`GET /reviews/product/:id`, with the backend's rating summary) and the
//! signed-in user's own reviews (`GET /reviews/user`) are cached in `meta`.
//!
//! The admin verification toggle returns the updated review; its merge rule
//! replaces the record in the admin list *and* in the per-product cache when
//! the same review is held there, keeping both views consistent.

use crate::clients::ReviewStore;
use crate::model::{ProductReviews, Review, ReviewCreate, ReviewUpdate};
use async_trait::async_trait;
use resource_store::{
    decode, encode, replace_entity, Backend, Payload, RequestError, ResourceState, ResourceStore,
    StoreEntity,
};
use std::sync::Arc;

/// Custom operations on the review resource.
#[derive(Debug, Clone)]
pub enum ReviewQuery {
    /// `GET /reviews/product/:id`
    ProductReviews { product_id: String },
    /// `GET /reviews/user`
    MyReviews,
    /// `PUT /reviews/admin/:id/verify`
    ToggleVerification { id: String },
}

#[derive(Debug)]
pub enum ReviewQueryResult {
    Product {
        product_id: String,
        summary: ProductReviews,
    },
    Mine(Vec<Review>),
    Verified(Review),
}

/// Secondary review caches beside the admin list.
#[derive(Debug, Clone, Default)]
pub struct ReviewMeta {
    /// Which product the cached per-product view belongs to.
    pub product_id: Option<String>,
    /// Last fetched per-product reviews with the rating summary.
    pub product: Option<ProductReviews>,
    /// The signed-in user's own reviews.
    pub mine: Vec<Review>,
}

#[async_trait]
impl StoreEntity for Review {
    type Id = String;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;
    type Query = ReviewQuery;
    type QueryResult = ReviewQueryResult;
    type Meta = ReviewMeta;
    type Context = Arc<dyn Backend>;

    fn id(&self) -> &String {
        &self.id
    }

    async fn fetch_list(ctx: &Self::Context) -> Result<Vec<Self>, RequestError> {
        decode(ctx.get("/reviews/admin/all", &[]).await?)
    }

    async fn create(ctx: &Self::Context, params: ReviewCreate) -> Result<Self, RequestError> {
        decode(
            ctx.post("/reviews", Payload::Json(encode(&params)?))
                .await?,
        )
    }

    async fn update(
        ctx: &Self::Context,
        id: &String,
        params: ReviewUpdate,
    ) -> Result<Self, RequestError> {
        decode(
            ctx.put(&format!("/reviews/{id}"), Payload::Json(encode(&params)?))
                .await?,
        )
    }

    async fn delete(ctx: &Self::Context, id: &String) -> Result<(), RequestError> {
        ctx.delete(&format!("/reviews/{id}")).await?;
        Ok(())
    }

    async fn query(
        ctx: &Self::Context,
        query: ReviewQuery,
    ) -> Result<ReviewQueryResult, RequestError> {
        match query {
            ReviewQuery::ProductReviews { product_id } => {
                let summary = decode(
                    ctx.get(&format!("/reviews/product/{product_id}"), &[])
                        .await?,
                )?;
                Ok(ReviewQueryResult::Product {
                    product_id,
                    summary,
                })
            }
            ReviewQuery::MyReviews => {
                Ok(ReviewQueryResult::Mine(decode(
                    ctx.get("/reviews/user", &[]).await?,
                )?))
            }
            ReviewQuery::ToggleVerification { id } => {
                let review = decode(
                    ctx.put(&format!("/reviews/admin/{id}/verify"), Payload::Empty)
                        .await?,
                )?;
                Ok(ReviewQueryResult::Verified(review))
            }
        }
    }

    fn apply_query(state: &mut ResourceState<Self>, result: ReviewQueryResult) {
        match result {
            ReviewQueryResult::Product {
                product_id,
                summary,
            } => {
                state.meta.product_id = Some(product_id);
                state.meta.product = Some(summary);
            }
            ReviewQueryResult::Mine(reviews) => state.meta.mine = reviews,
            ReviewQueryResult::Verified(review) => {
                replace_entity(&mut state.items, review.clone());
                if let Some(summary) = state.meta.product.as_mut() {
                    replace_entity(&mut summary.reviews, review);
                }
            }
        }
    }
}

/// Creates the review container and its typed client.
pub fn new() -> (ResourceStore<Review>, ReviewStore) {
    let (store, client) = ResourceStore::new(super::CHANNEL_CAPACITY);
    (store, ReviewStore::new(client))
}
