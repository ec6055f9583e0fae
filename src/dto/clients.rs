use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterClientRequest {
    pub name: String,
    pub email: String,
}

impl RegisterClientRequest {
    pub fn validate(&self) -> AppResult<()> {
        check_length("name", &self.name)?;
        check_length("email", &self.email)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: String,
    /// Target favorites set; replaces the stored set wholesale.
    /// Ids that resolve to no product are dropped silently.
    pub favorite_products: Vec<i32>,
}

impl UpdateClientRequest {
    pub fn validate(&self) -> AppResult<()> {
        check_length("name", &self.name)?;
        check_length("email", &self.email)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub favorite_products: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ClientList {
    #[schema(value_type = Vec<ClientResponse>)]
    pub items: Vec<ClientResponse>,
}

fn check_length(field: &str, value: &str) -> AppResult<()> {
    let len = value.chars().count();
    if !(3..=50).contains(&len) {
        return Err(AppError::Validation(format!(
            "{field} must be between 3 and 50 characters"
        )));
    }
    Ok(())
}
