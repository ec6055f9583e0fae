use crate::{
    db::DbPool,
    dto::products::{ProductList, RegisterProductRequest},
    error::{AppError, AppResult},
    models::Product,
    routes::params::ProductListQuery,
};

pub async fn list_products(db: &DbPool, query: ProductListQuery) -> AppResult<ProductList> {
    let (page, page_size, offset) = query.normalize();

    let total: (i64,) = sqlx::query_as("SELECT count(*) FROM product")
        .fetch_one(db)
        .await?;

    // Page 1 of an empty table is an empty list; anything past the last
    // page is a missing resource.
    let total_pages = (total.0 + page_size - 1) / page_size;
    if page > 1 && page > total_pages {
        return Err(AppError::NotFound("Page"));
    }

    let items = sqlx::query_as::<_, Product>(
        "SELECT * FROM product ORDER BY id LIMIT $1 OFFSET $2",
    )
    .bind(page_size)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(ProductList { items })
}

pub async fn get_product(db: &DbPool, id: i32) -> AppResult<Product> {
    sqlx::query_as::<_, Product>("SELECT * FROM product WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("Product"))
}

pub async fn register_product(
    db: &DbPool,
    payload: RegisterProductRequest,
) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO product (price, image, brand, title, review_score)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(payload.price)
    .bind(&payload.image)
    .bind(&payload.brand)
    .bind(&payload.title)
    .bind(payload.review_score)
    .fetch_one(db)
    .await?;

    Ok(product)
}

pub async fn delete_product(db: &DbPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Product"));
    }

    Ok(())
}
