//! # Coming-Soon Section Container
//!
//! Upcoming-product teasers, same admin/active split as home sections on the
//! `/coming-soon-sections` base path.

use crate::clients::ComingSoonStore;
use crate::model::{ComingSoonSection, ComingSoonSectionCreate, ComingSoonSectionUpdate};
use async_trait::async_trait;
use resource_store::{
    decode, encode, Backend, Payload, RequestError, ResourceState, ResourceStore, StoreEntity,
};
use std::sync::Arc;

/// Custom operations on the coming-soon resource.
#[derive(Debug, Clone)]
pub enum ComingSoonQuery {
    /// `GET /coming-soon-sections/active`
    Active,
}

#[async_trait]
impl StoreEntity for ComingSoonSection {
    type Id = String;
    type Create = ComingSoonSectionCreate;
    type Update = ComingSoonSectionUpdate;
    type Query = ComingSoonQuery;
    type QueryResult = Vec<ComingSoonSection>;
    type Meta = Vec<ComingSoonSection>;
    type Context = Arc<dyn Backend>;

    fn id(&self) -> &String {
        &self.id
    }

    async fn fetch_list(ctx: &Self::Context) -> Result<Vec<Self>, RequestError> {
        decode(ctx.get("/coming-soon-sections/admin/all", &[]).await?)
    }

    async fn create(
        ctx: &Self::Context,
        params: ComingSoonSectionCreate,
    ) -> Result<Self, RequestError> {
        decode(
            ctx.post("/coming-soon-sections/admin", Payload::Json(encode(&params)?))
                .await?,
        )
    }

    async fn update(
        ctx: &Self::Context,
        id: &String,
        params: ComingSoonSectionUpdate,
    ) -> Result<Self, RequestError> {
        decode(
            ctx.put(
                &format!("/coming-soon-sections/admin/{id}"),
                Payload::Json(encode(&params)?),
            )
            .await?,
        )
    }

    async fn delete(ctx: &Self::Context, id: &String) -> Result<(), RequestError> {
        ctx.delete(&format!("/coming-soon-sections/admin/{id}")).await?;
        Ok(())
    }

    async fn query(
        ctx: &Self::Context,
        query: ComingSoonQuery,
    ) -> Result<Vec<ComingSoonSection>, RequestError> {
        match query {
            ComingSoonQuery::Active => decode(ctx.get("/coming-soon-sections/active", &[]).await?),
        }
    }

    fn apply_query(state: &mut ResourceState<Self>, result: Vec<ComingSoonSection>) {
        state.meta = result;
    }
}

/// Creates the coming-soon container and its typed client.
pub fn new() -> (ResourceStore<ComingSoonSection>, ComingSoonStore) {
    let (store, client) = ResourceStore::new(super::CHANNEL_CAPACITY);
    (store, ComingSoonStore::new(client))
}
