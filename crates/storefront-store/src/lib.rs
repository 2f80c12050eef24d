//! # Storefront Store
//!
//! The client-side state layer of an e-commerce storefront, built on the
//! generic containers in [`resource_store`].
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Category`](model::Category),
//!   [`Review`](model::Review), [`HomeSection`](model::HomeSection), ...) and
//!   their create/update payloads.
//! - **[stores]**: The per-resource container wiring: each module implements
//!   [`StoreEntity`](resource_store::StoreEntity) for one resource, mapping
//!   its operations to REST endpoints and deciding how results merge into
//!   cached state.
//! - **[clients]**: Type-safe wrappers (e.g. [`CategoryStore`](clients::CategoryStore))
//!   that hide the message passing and expose the resource's custom
//!   operations.
//! - **[lifecycle]**: Orchestration layer that spawns the containers against
//!   a shared backend and shuts them down.
//! - **[config]**: Environment-driven runtime settings.
//!
//! ## Testing
//!
//! See [`resource_store::mock`] for the scripted backend used to test
//! containers without a live API.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod stores;
