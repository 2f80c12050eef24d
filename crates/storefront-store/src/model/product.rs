use serde::{Deserialize, Serialize};

/// A product as listed under a category.
///
/// Products are managed by a different part of the platform; this store only
/// mirrors them read-only inside category pagination results and the admin
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}
