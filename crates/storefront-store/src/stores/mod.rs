//! # Resource Containers
//!
//! One module per backend resource. Each implements
//! [`StoreEntity`](resource_store::StoreEntity) for its model — the REST
//! calls of the resource's operation set plus the merge rule for its custom
//! queries — and exposes a `new()` factory returning the container and its
//! typed client, the way every resource here is wired:
//!
//! ```ignore
//! let (store, categories) = stores::categories::new();
//! tokio::spawn(store.run(backend.clone()));
//! categories.refresh().await?;
//! ```
//!
//! No container implements business rules beyond pass-through CRUD: no
//! client-side validation, no conflict detection, no retries.

pub mod categories;
pub mod coming_soon;
pub mod dashboard;
pub mod home_sections;
pub mod reviews;

/// Request-channel capacity shared by every container.
pub(crate) const CHANNEL_CAPACITY: usize = 32;
