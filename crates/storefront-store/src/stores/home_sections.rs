//! # Home Section Container
//!
//! Homepage content sections. `items` mirrors the admin listing (every
//! section, active or not); the storefront-visible active list is fetched
//! separately and cached in `meta`.

use crate::clients::HomeSectionStore;
use crate::model::{HomeSection, HomeSectionCreate, HomeSectionUpdate};
use async_trait::async_trait;
use resource_store::{
    decode, encode, Backend, Payload, RequestError, ResourceState, ResourceStore, StoreEntity,
};
use std::sync::Arc;

/// Custom operations on the home-section resource.
#[derive(Debug, Clone)]
pub enum HomeSectionQuery {
    /// `GET /home-sections/active`
    Active,
}

#[async_trait]
impl StoreEntity for HomeSection {
    type Id = String;
    type Create = HomeSectionCreate;
    type Update = HomeSectionUpdate;
    type Query = HomeSectionQuery;
    type QueryResult = Vec<HomeSection>;
    type Meta = Vec<HomeSection>;
    type Context = Arc<dyn Backend>;

    fn id(&self) -> &String {
        &self.id
    }

    async fn fetch_list(ctx: &Self::Context) -> Result<Vec<Self>, RequestError> {
        decode(ctx.get("/home-sections/admin/all", &[]).await?)
    }

    async fn create(ctx: &Self::Context, params: HomeSectionCreate) -> Result<Self, RequestError> {
        decode(
            ctx.post("/home-sections/admin", Payload::Json(encode(&params)?))
                .await?,
        )
    }

    async fn update(
        ctx: &Self::Context,
        id: &String,
        params: HomeSectionUpdate,
    ) -> Result<Self, RequestError> {
        decode(
            ctx.put(
                &format!("/home-sections/admin/{id}"),
                Payload::Json(encode(&params)?),
            )
            .await?,
        )
    }

    async fn delete(ctx: &Self::Context, id: &String) -> Result<(), RequestError> {
        ctx.delete(&format!("/home-sections/admin/{id}")).await?;
        Ok(())
    }

    async fn query(
        ctx: &Self::Context,
        query: HomeSectionQuery,
    ) -> Result<Vec<HomeSection>, RequestError> {
        match query {
            HomeSectionQuery::Active => decode(ctx.get("/home-sections/active", &[]).await?),
        }
    }

    fn apply_query(state: &mut ResourceState<Self>, result: Vec<HomeSection>) {
        state.meta = result;
    }
}

/// Creates the home-section container and its typed client.
pub fn new() -> (ResourceStore<HomeSection>, HomeSectionStore) {
    let (store, client) = ResourceStore::new(super::CHANNEL_CAPACITY);
    (store, HomeSectionStore::new(client))
}
