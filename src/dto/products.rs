use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterProductRequest {
    pub price: f64,
    pub image: String,
    pub brand: String,
    pub title: String,
    pub review_score: f64,
}

impl RegisterProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        check_max_length("image", &self.image)?;
        check_max_length("brand", &self.brand)?;
        check_max_length("title", &self.title)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

fn check_max_length(field: &str, value: &str) -> AppResult<()> {
    if value.chars().count() > 50 {
        return Err(AppError::Validation(format!(
            "{field} must be at most 50 characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_strings() {
        let req = RegisterProductRequest {
            price: 5000.0,
            image: "i".repeat(51),
            brand: "Brand 1".into(),
            title: "Title 1".into(),
            review_score: 4.75,
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }
}
