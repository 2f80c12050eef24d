//! Typed clients, one per resource container.
//!
//! Each client wraps the generic [`resource_store::StoreClient`] and adds the
//! resource's custom operations on top of the shared [`TypedStoreClient`]
//! surface.

pub mod category_store;
pub mod coming_soon_store;
pub mod dashboard_store;
pub mod home_section_store;
pub mod review_store;

pub use category_store::CategoryStore;
pub use coming_soon_store::ComingSoonStore;
pub use dashboard_store::DashboardStore;
pub use home_section_store::HomeSectionStore;
pub use review_store::ReviewStore;
