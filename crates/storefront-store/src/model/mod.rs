//! # Wire Models
//!
//! Data structures mirroring the backend's JSON records. The backend is a
//! JS-style REST API, so every struct renames to camelCase on the wire and
//! models absent fields as `Option` rather than an open map. These are pure
//! data; the operations live in [`crate::stores`].

pub mod category;
pub mod dashboard;
pub mod product;
pub mod review;
pub mod section;

pub use category::{Category, CategoryCreate, CategoryProductsPage, CategoryUpdate, ImageUpload};
pub use dashboard::{DashboardReport, DashboardStats, RecentUser};
pub use product::Product;
pub use review::{ProductReviews, RatingDistribution, Review, ReviewCreate, ReviewUpdate};
pub use section::{
    ComingSoonSection, ComingSoonSectionCreate, ComingSoonSectionUpdate, HomeSection,
    HomeSectionCreate, HomeSectionUpdate,
};
