use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Client row. Rendered to the wire through `dto::clients::ClientResponse`
/// with its favorites joined in.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub price: f64,
    pub image: String,
    pub brand: String,
    pub title: String,
    pub review_score: f64,
}
