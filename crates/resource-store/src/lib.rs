//! # Resource Store
//!
//! Generic building blocks for client-side asynchronous resource state
//! containers — the "slice" pattern: one container per backend resource,
//! each wrapping a small set of asynchronous operations (fetch-list,
//! fetch-one, create, update, delete, plus resource-specific queries) and
//! exposing a normalized in-memory mirror with loading/error flags.
//!
//! ## Architecture Overview
//!
//! Three layers, each with one seam:
//!
//! 1. **Transport** ([`Backend`] / [`ApiClient`]) — issues one REST call,
//!    attaches the auth credential, normalizes failures into a single
//!    message-carrying [`RequestError`]. No retries, no caching.
//! 2. **Container** ([`ResourceStore`] / [`StoreClient`]) — a task owning
//!    one resource's [`ResourceState`], processing dispatches through the
//!    pending → fulfilled/rejected phases and applying deterministic merge
//!    rules. A per-container generation counter detects and drops results
//!    of superseded in-flight operations.
//! 3. **Entity contract** ([`StoreEntity`]) — what a concrete resource
//!    defines: its payload types, its REST calls, and the merge rule for
//!    its custom queries.
//!
//! ## Control flow
//!
//! A view dispatches an operation through a [`StoreClient`] → the container
//! marks itself loading and spawns the backend call → the call settles →
//! the container merges the result (or stores the error message) → the view
//! reads the new state via `snapshot()`. Failures never cross the container
//! boundary as panics; the caller's awaited settlement and the `error` state
//! are the only signals.
//!
//! ## Concurrency model
//!
//! - each container runs in its own task; its state is never shared mutably
//! - writes are serialized by the container's message loop, no locks
//! - any number of clients may read snapshots concurrently
//! - overlapping dispatches are allowed: every settlement resolves its
//!   caller, but only the latest generation may touch shared state
//!
//! ## Testing
//!
//! [`mock::MockBackend`] implements [`Backend`] over an expectation queue,
//! so tests drive real containers deterministically and assert on
//! mismatched or unmet expectations. See the [`mock`] module.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod http;
pub mod message;
pub mod mock;
pub mod state;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use client::StoreClient;
pub use client_trait::TypedStoreClient;
pub use entity::StoreEntity;
pub use error::RequestError;
pub use http::{decode, encode, ApiClient, Backend, FormPart, FormValue, Payload};
pub use message::{Operation, Outcome, Settlement, StoreRequest};
pub use mock::MockBackend;
pub use state::{replace_entity, ResourceState};
pub use store::ResourceStore;
pub use crate::tracing::setup_tracing;
