//! # TypedStoreClient Trait
//!
//! Common interface for resource-specific store clients. A typed client
//! (e.g. `CategoryStore`) wraps a generic [`StoreClient`] and adds domain
//! methods; this trait contributes default implementations for the
//! operations every resource shares, so each wrapper only writes what is
//! unique to it.

use crate::entity::StoreEntity;
use crate::error::RequestError;
use crate::state::ResourceState;
use crate::StoreClient;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct CategoryStore {
///     inner: StoreClient<Category>,
/// }
///
/// #[async_trait]
/// impl TypedStoreClient<Category> for CategoryStore {
///     fn inner(&self) -> &StoreClient<Category> {
///         &self.inner
///     }
/// }
///
/// // snapshot(), refresh(), remove() and dismiss_error() come for free.
/// let state = store.snapshot().await?;
/// ```
#[async_trait]
pub trait TypedStoreClient<T: StoreEntity>: Send + Sync {
    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Read a clone of the current container state.
    async fn snapshot(&self) -> Result<ResourceState<T>, RequestError> {
        self.inner().snapshot().await
    }

    /// Re-fetch the listing.
    #[tracing::instrument(skip(self))]
    async fn refresh(&self) -> Result<(), RequestError> {
        self.inner().fetch_list().await
    }

    /// Fetch one entity into `selected`.
    #[tracing::instrument(skip(self))]
    async fn select(&self, id: T::Id) -> Result<(), RequestError> {
        self.inner().fetch_one(id).await
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), RequestError> {
        self.inner().delete(id).await
    }

    /// Dismiss the current error banner.
    async fn dismiss_error(&self) -> Result<(), RequestError> {
        self.inner().clear_error().await
    }
}
