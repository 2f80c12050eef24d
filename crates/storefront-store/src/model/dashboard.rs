use crate::model::Product;
use serde::Deserialize;

/// Aggregate counters computed by the backend for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_users: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
}

/// A recently registered user, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The full response of `GET /admin/dashboard`.
///
/// The report is a singleton, not a listed entity; its container keeps it in
/// `selected`. The `id` only exists to satisfy the entity contract and the
/// backend never sends one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    #[serde(default)]
    pub id: String,
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_products: Vec<Product>,
    #[serde(default)]
    pub recent_users: Vec<RecentUser>,
}
