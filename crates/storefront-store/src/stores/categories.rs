//! # Category Container
//!
//! Categories are the one resource with a multipart surface (image upload on
//! create/update) and a paginated sub-listing: `GET /categories/:id/products`
//! returns one page of products plus the backend's pagination counters,
//! mirrored verbatim into the container's `meta`.

use crate::clients::CategoryStore;
use crate::model::{Category, CategoryCreate, CategoryProductsPage, CategoryUpdate};
use async_trait::async_trait;
use resource_store::{
    decode, Backend, Payload, RequestError, ResourceState, ResourceStore, StoreEntity,
};
use std::sync::Arc;

/// Custom operations on the category resource.
#[derive(Debug, Clone)]
pub enum CategoryQuery {
    /// `GET /categories/:id/products?page=&limit=`
    ProductsPage {
        category_id: String,
        page: u32,
        limit: u32,
    },
}

#[async_trait]
impl StoreEntity for Category {
    type Id = String;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Query = CategoryQuery;
    type QueryResult = CategoryProductsPage;
    type Meta = Option<CategoryProductsPage>;
    type Context = Arc<dyn Backend>;

    fn id(&self) -> &String {
        &self.id
    }

    async fn fetch_list(ctx: &Self::Context) -> Result<Vec<Self>, RequestError> {
        decode(ctx.get("/categories", &[]).await?)
    }

    async fn fetch_one(ctx: &Self::Context, id: &String) -> Result<Self, RequestError> {
        decode(ctx.get(&format!("/categories/{id}"), &[]).await?)
    }

    async fn create(ctx: &Self::Context, params: CategoryCreate) -> Result<Self, RequestError> {
        decode(
            ctx.post("/categories", Payload::Multipart(params.into_parts()))
                .await?,
        )
    }

    async fn update(
        ctx: &Self::Context,
        id: &String,
        params: CategoryUpdate,
    ) -> Result<Self, RequestError> {
        decode(
            ctx.put(
                &format!("/categories/{id}"),
                Payload::Multipart(params.into_parts()),
            )
            .await?,
        )
    }

    async fn delete(ctx: &Self::Context, id: &String) -> Result<(), RequestError> {
        ctx.delete(&format!("/categories/{id}")).await?;
        Ok(())
    }

    async fn query(
        ctx: &Self::Context,
        query: CategoryQuery,
    ) -> Result<CategoryProductsPage, RequestError> {
        match query {
            CategoryQuery::ProductsPage {
                category_id,
                page,
                limit,
            } => {
                let params = vec![
                    ("page".to_string(), page.to_string()),
                    ("limit".to_string(), limit.to_string()),
                ];
                decode(
                    ctx.get(&format!("/categories/{category_id}/products"), &params)
                        .await?,
                )
            }
        }
    }

    fn apply_query(state: &mut ResourceState<Self>, result: CategoryProductsPage) {
        state.meta = Some(result);
    }
}

/// Creates the category container and its typed client.
pub fn new() -> (ResourceStore<Category>, CategoryStore) {
    let (store, client) = ResourceStore::new(super::CHANNEL_CAPACITY);
    (store, CategoryStore::new(client))
}
