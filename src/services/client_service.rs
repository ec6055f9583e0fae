use std::collections::HashMap;

use sqlx::FromRow;

use crate::{
    db::DbPool,
    dto::clients::{ClientList, ClientResponse, RegisterClientRequest, UpdateClientRequest},
    error::{AppError, AppResult},
    models::{Client, Product},
    routes::params::ClientListQuery,
};

pub async fn list_clients(db: &DbPool, query: ClientListQuery) -> AppResult<ClientList> {
    let (limit, offset) = query.normalize();
    let clients = sqlx::query_as::<_, Client>(
        "SELECT * FROM client ORDER BY created_at, id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    let ids: Vec<i32> = clients.iter().map(|c| c.id).collect();
    let mut favorites = load_favorites(db, &ids).await?;

    let items = clients
        .into_iter()
        .map(|client| {
            let favorite_products = favorites.remove(&client.id).unwrap_or_default();
            render_client(client, favorite_products)
        })
        .collect();

    Ok(ClientList { items })
}

pub async fn get_client(db: &DbPool, id: i32) -> AppResult<ClientResponse> {
    let client = sqlx::query_as::<_, Client>("SELECT * FROM client WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("Client"))?;

    let mut favorites = load_favorites(db, &[client.id]).await?;
    let favorite_products = favorites.remove(&client.id).unwrap_or_default();
    Ok(render_client(client, favorite_products))
}

pub async fn register_client(
    db: &DbPool,
    payload: RegisterClientRequest,
) -> AppResult<ClientResponse> {
    let mut tx = db.begin().await?;

    let taken: Option<(i32,)> = sqlx::query_as("SELECT id FROM client WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(&mut *tx)
        .await?;
    if taken.is_some() {
        return Err(AppError::Conflict("Email already registered.".into()));
    }

    let client = sqlx::query_as::<_, Client>(
        "INSERT INTO client (name, email) VALUES ($1, $2) RETURNING *",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(render_client(client, Vec::new()))
}

pub async fn update_client(
    db: &DbPool,
    id: i32,
    payload: UpdateClientRequest,
) -> AppResult<ClientResponse> {
    let mut tx = db.begin().await?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT id FROM client WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(AppError::NotFound("Client"));
    }

    // Uniqueness check excludes the record being updated by id, so an
    // unchanged email never conflicts with itself.
    let taken: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM client WHERE email = $1 AND id <> $2")
            .bind(&payload.email)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    if taken.is_some() {
        return Err(AppError::Conflict("Email already registered.".into()));
    }

    let client = sqlx::query_as::<_, Client>(
        "UPDATE client SET name = $2, email = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.email)
    .fetch_one(&mut *tx)
    .await?;

    // The favorites set is replaced wholesale. Selecting the new edges out
    // of product filters unknown ids, and ON CONFLICT collapses duplicates.
    sqlx::query("DELETE FROM client_product WHERE client_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO client_product (client_id, product_id)
        SELECT $1, id FROM product WHERE id = ANY($2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(id)
    .bind(&payload.favorite_products)
    .execute(&mut *tx)
    .await?;

    let favorite_products = sqlx::query_as::<_, Product>(
        r#"
        SELECT p.*
        FROM client_product cp
        JOIN product p ON p.id = cp.product_id
        WHERE cp.client_id = $1
        ORDER BY p.id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(render_client(client, favorite_products))
}

pub async fn delete_client(db: &DbPool, id: i32) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM client WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Client"));
    }

    Ok(())
}

#[derive(FromRow)]
struct FavoriteRow {
    client_id: i32,
    #[sqlx(flatten)]
    product: Product,
}

/// Joined, eager fetch of the favorites of a batch of clients.
async fn load_favorites(db: &DbPool, client_ids: &[i32]) -> AppResult<HashMap<i32, Vec<Product>>> {
    if client_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, FavoriteRow>(
        r#"
        SELECT cp.client_id, p.id, p.price, p.image, p.brand, p.title, p.review_score
        FROM client_product cp
        JOIN product p ON p.id = cp.product_id
        WHERE cp.client_id = ANY($1)
        ORDER BY p.id
        "#,
    )
    .bind(client_ids)
    .fetch_all(db)
    .await?;

    let mut favorites: HashMap<i32, Vec<Product>> = HashMap::new();
    for row in rows {
        favorites.entry(row.client_id).or_default().push(row.product);
    }
    Ok(favorites)
}

fn render_client(client: Client, favorite_products: Vec<Product>) -> ClientResponse {
    ClientResponse {
        id: client.id,
        name: client.name,
        email: client.email,
        favorite_products,
    }
}
