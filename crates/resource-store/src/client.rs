//! # Generic Store Client
//!
//! The cloneable handle views and per-resource clients use to talk to a
//! running [`ResourceStore`](crate::ResourceStore). Every operation method
//! returns only after the container has settled the dispatch, so callers can
//! sequence follow-ups (the common "create, then re-fetch the list" flow).
//! State is read through [`snapshot`](StoreClient::snapshot).

use crate::entity::StoreEntity;
use crate::error::RequestError;
use crate::message::{Operation, StoreRequest};
use crate::state::ResourceState;
use tokio::sync::{mpsc, oneshot};

/// Type-safe client for one resource container.
#[derive(Debug, Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn dispatch(&self, op: Operation<T>) -> Result<(), RequestError> {
        let (respond_to, settlement) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { op, respond_to })
            .await
            .map_err(|_| RequestError::StoreClosed)?;
        settlement.await.map_err(|_| RequestError::StoreDropped)?
    }

    /// Fetch the listing; on success `items` is replaced wholesale.
    pub async fn fetch_list(&self) -> Result<(), RequestError> {
        self.dispatch(Operation::FetchList).await
    }

    /// Fetch one entity into `selected`.
    pub async fn fetch_one(&self, id: T::Id) -> Result<(), RequestError> {
        self.dispatch(Operation::FetchOne(id)).await
    }

    /// Create an entity; on success it is appended to `items`.
    pub async fn create(&self, params: T::Create) -> Result<(), RequestError> {
        self.dispatch(Operation::Create(params)).await
    }

    /// Update an entity in place by id.
    pub async fn update(&self, id: T::Id, params: T::Update) -> Result<(), RequestError> {
        self.dispatch(Operation::Update(id, params)).await
    }

    /// Delete an entity by id.
    pub async fn delete(&self, id: T::Id) -> Result<(), RequestError> {
        self.dispatch(Operation::Delete(id)).await
    }

    /// Run a resource-specific custom operation.
    pub async fn query(&self, query: T::Query) -> Result<(), RequestError> {
        self.dispatch(Operation::Query(query)).await
    }

    /// Read a clone of the current container state.
    pub async fn snapshot(&self) -> Result<ResourceState<T>, RequestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| RequestError::StoreClosed)?;
        response.await.map_err(|_| RequestError::StoreDropped)
    }

    /// Dismiss the current error banner without retrying anything.
    pub async fn clear_error(&self) -> Result<(), RequestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::ClearError { respond_to })
            .await
            .map_err(|_| RequestError::StoreClosed)?;
        response.await.map_err(|_| RequestError::StoreDropped)
    }
}
