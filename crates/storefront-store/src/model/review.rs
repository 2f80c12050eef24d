use serde::{Deserialize, Serialize};

/// A product review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
}

/// Payload for `PUT /reviews/:id`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Star-count histogram computed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RatingDistribution {
    #[serde(rename = "1", default)]
    pub one: u32,
    #[serde(rename = "2", default)]
    pub two: u32,
    #[serde(rename = "3", default)]
    pub three: u32,
    #[serde(rename = "4", default)]
    pub four: u32,
    #[serde(rename = "5", default)]
    pub five: u32,
}

/// Response of `GET /reviews/product/:id`: the review list plus the
/// backend-computed rating summary, stored verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviews {
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
}
