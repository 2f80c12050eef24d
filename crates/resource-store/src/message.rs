//! # Container Messages
//!
//! Message types exchanged between [`StoreClient`](crate::StoreClient) and
//! [`ResourceStore`](crate::ResourceStore). The operation set is fixed — the
//! five CRUD kinds plus a resource-specific `Query` — so every container
//! speaks the same protocol with its own payload types.

use crate::entity::StoreEntity;
use crate::error::RequestError;
use crate::state::ResourceState;
use tokio::sync::oneshot;

/// One-shot settlement channel resolved after the container has applied (or
/// rejected) the operation's result.
pub type Settlement = oneshot::Sender<Result<(), RequestError>>;

/// An asynchronous operation against a resource.
#[derive(Debug)]
pub enum Operation<T: StoreEntity> {
    FetchList,
    FetchOne(T::Id),
    Create(T::Create),
    Update(T::Id, T::Update),
    Delete(T::Id),
    Query(T::Query),
}

impl<T: StoreEntity> Operation<T> {
    /// Short name for structured logging.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Operation::FetchList => "fetch_list",
            Operation::FetchOne(_) => "fetch_one",
            Operation::Create(_) => "create",
            Operation::Update(..) => "update",
            Operation::Delete(_) => "delete",
            Operation::Query(_) => "query",
        }
    }
}

/// Requests accepted by a running container.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    /// Dispatch an operation; the settlement resolves after settlement has
    /// been applied to (or rejected from) container state.
    Dispatch {
        op: Operation<T>,
        respond_to: Settlement,
    },
    /// Read a clone of the current state.
    Snapshot {
        respond_to: oneshot::Sender<ResourceState<T>>,
    },
    /// Reset `error` to `None` without touching data (banner dismissal).
    ClearError { respond_to: oneshot::Sender<()> },
}

/// What a fulfilled operation produced, tagged with its merge rule.
#[derive(Debug)]
pub enum Outcome<T: StoreEntity> {
    List(Vec<T>),
    One(T),
    Created(T),
    Updated(T),
    Deleted(T::Id),
    Query(T::QueryResult),
}
