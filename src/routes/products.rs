use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    db::DbPool,
    dto::products::{ProductList, RegisterProductRequest},
    error::{AppResult, ErrorBody},
    models::Product,
    routes::params::ProductListQuery,
    services::product_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/list", get(list_products))
        .route("/register", post(register_product))
        .route("/delete/{id}", delete(delete_product))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/product/list",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("page_size" = Option<i64>, Query, description = "Products per page, default 10"),
    ),
    responses(
        (status = 200, description = "Products ordered by id", body = ProductList),
        (status = 404, description = "Page past the last one", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(pool): State<DbPool>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<ProductList>> {
    let products = product_service::list_products(&pool, query).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&pool, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/product/register",
    request_body = RegisterProductRequest,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 422, description = "Field constraint violated", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn register_product(
    State(pool): State<DbPool>,
    Json(payload): Json<RegisterProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    payload.validate()?;
    let product = product_service::register_product(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/product/delete/{id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
