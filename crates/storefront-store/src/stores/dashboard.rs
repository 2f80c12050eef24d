//! # Admin Dashboard Container
//!
//! A read-only singleton: one aggregate report served by `GET /admin/dashboard`.
//! The container keeps the latest report in `selected`; the item list stays
//! empty and the write operations are left unimplemented.

use crate::clients::DashboardStore;
use crate::model::DashboardReport;
use async_trait::async_trait;
use resource_store::{decode, Backend, RequestError, ResourceState, ResourceStore, StoreEntity};
use std::sync::Arc;

/// Operations on the dashboard resource.
#[derive(Debug, Clone)]
pub enum DashboardQuery {
    /// `GET /admin/dashboard`
    Fetch,
}

#[async_trait]
impl StoreEntity for DashboardReport {
    type Id = String;
    type Create = ();
    type Update = ();
    type Query = DashboardQuery;
    type QueryResult = DashboardReport;
    type Meta = ();
    type Context = Arc<dyn Backend>;

    fn id(&self) -> &String {
        &self.id
    }

    async fn query(
        ctx: &Self::Context,
        query: DashboardQuery,
    ) -> Result<DashboardReport, RequestError> {
        match query {
            DashboardQuery::Fetch => decode(ctx.get("/admin/dashboard", &[]).await?),
        }
    }

    fn apply_query(state: &mut ResourceState<Self>, result: DashboardReport) {
        state.selected = Some(result);
    }
}

/// Creates the dashboard container and its typed client.
pub fn new() -> (ResourceStore<DashboardReport>, DashboardStore) {
    let (store, client) = ResourceStore::new(super::CHANNEL_CAPACITY);
    (store, DashboardStore::new(client))
}
