//! # Store Errors
//!
//! This module defines the single flat error type shared by the HTTP wrapper,
//! the generic container, and every resource instantiation. The only signal a
//! failed operation carries is a human-readable message; containers store it
//! verbatim in their `error` state and callers receive it in the settlement.

/// Errors surfaced by store operations.
///
/// Server-side failures prefer the backend's own `message` field
/// ([`RequestError::Api`]); everything that never reached a well-formed
/// response becomes [`RequestError::Transport`]. The two channel variants
/// mean the container task is gone, which only happens during shutdown.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// The backend answered with a non-success status; the message is the
    /// server-supplied error field when present.
    #[error("{0}")]
    Api(String),

    /// The request never produced a usable response (connection failure,
    /// malformed body, invalid payload).
    #[error("request failed: {0}")]
    Transport(String),

    /// The resource does not define this operation.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    /// The container's request channel is closed.
    #[error("store closed")]
    StoreClosed,

    /// The container dropped the settlement channel.
    #[error("store dropped response")]
    StoreDropped,
}
