//! # StoreEntity Trait
//!
//! The contract every resource type (Category, Review, HomeSection, …) must
//! implement to be managed by the generic [`ResourceStore`](crate::ResourceStore).
//!
//! # Architecture Note
//! By defining one contract for all resources, the container logic — phase
//! transitions, merge rules, stale-result dropping — is written *once* and
//! reused everywhere. Associated types keep every instantiation type-safe:
//! a `Category` store only accepts `CategoryCreate` payloads, and the
//! compiler rejects anything else.
//!
//! Every operation method has a default implementation returning
//! [`RequestError::Unsupported`], so a resource only defines the operations
//! its backend actually exposes (the dashboard, for example, is query-only).

use crate::error::RequestError;
use crate::state::ResourceState;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Contract for a backend resource mirrored by a store container.
///
/// # Context Injection
/// Each operation receives a `&Self::Context` — in production an
/// `Arc<dyn Backend>` — injected when the container starts running. This late
/// binding keeps entity code free of transport construction and lets tests
/// substitute a mock backend.
#[async_trait]
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// Opaque server-assigned identifier (e.g. String, Uuid).
    type Id: Eq + Clone + Send + Sync + Debug + Display;

    /// Payload for the create operation.
    type Create: Send + Sync + Debug + 'static;

    /// Payload for the update operation.
    type Update: Send + Sync + Debug + 'static;

    /// Resource-specific custom operations (e.g. `ToggleVerification`).
    type Query: Send + Sync + Debug + 'static;

    /// Result produced by a custom operation, merged via [`apply_query`].
    ///
    /// [`apply_query`]: StoreEntity::apply_query
    type QueryResult: Send + Sync + Debug + 'static;

    /// Resource-specific denormalized state stored beside `items` (pagination
    /// counters, rating summaries, secondary cached lists). Use `()` when the
    /// resource has none.
    type Meta: Clone + Debug + Default + Send + Sync + 'static;

    /// The backend handle injected into every operation.
    type Context: Send + Sync + 'static;

    /// The entity's identifier, used by the replace/remove merge rules.
    fn id(&self) -> &Self::Id;

    // --- Operations (each one suspends exactly at the request boundary) ---

    /// Fetch the full listing for this resource.
    async fn fetch_list(_ctx: &Self::Context) -> Result<Vec<Self>, RequestError> {
        Err(RequestError::Unsupported("fetch_list"))
    }

    /// Fetch a single entity by id.
    async fn fetch_one(_ctx: &Self::Context, _id: &Self::Id) -> Result<Self, RequestError> {
        Err(RequestError::Unsupported("fetch_one"))
    }

    /// Create a new entity; the returned record is appended to `items`.
    async fn create(_ctx: &Self::Context, _params: Self::Create) -> Result<Self, RequestError> {
        Err(RequestError::Unsupported("create"))
    }

    /// Update an entity; the returned record replaces the matching id.
    async fn update(
        _ctx: &Self::Context,
        _id: &Self::Id,
        _params: Self::Update,
    ) -> Result<Self, RequestError> {
        Err(RequestError::Unsupported("update"))
    }

    /// Delete an entity; the matching id is filtered out of `items`.
    async fn delete(_ctx: &Self::Context, _id: &Self::Id) -> Result<(), RequestError> {
        Err(RequestError::Unsupported("delete"))
    }

    /// Run a resource-specific custom operation.
    async fn query(
        _ctx: &Self::Context,
        _query: Self::Query,
    ) -> Result<Self::QueryResult, RequestError> {
        Err(RequestError::Unsupported("query"))
    }

    /// Merge a successful custom-operation result into the state.
    ///
    /// This is the resource's own merge rule; the default drops the result.
    fn apply_query(state: &mut ResourceState<Self>, result: Self::QueryResult) {
        let _ = (state, result);
    }
}
