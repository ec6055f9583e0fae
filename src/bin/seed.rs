use axum_favorites_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_clients(&pool).await?;
    seed_products(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_clients(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let clients = vec![
        ("Kassio", "kassio@mail.com"),
        ("Joao Pedro", "jp@mail.com"),
        ("Gustavo", "gustavo@mail.com"),
        ("Eliza", "eliza@mail.com"),
    ];

    for (name, email) in clients {
        sqlx::query(
            r#"
            INSERT INTO client (name, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(email)
        .execute(pool)
        .await?;
    }

    println!("Seeded clients");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    // Products carry no natural unique key; only seed an empty table.
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM product")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Products already present, skipping");
        return Ok(());
    }

    let products = vec![
        (5000.0, "img001.jpg", "Brand 1", "Title 1", 4.75),
        (10000.0, "img002.jpg", "Brand 2", "Title 2", 5.0),
        (1500.0, "img003.jpg", "Brand 3", "Title 3", 3.5),
    ];

    for (price, image, brand, title, review_score) in products {
        sqlx::query(
            r#"
            INSERT INTO product (price, image, brand, title, review_score)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(price)
        .bind(image)
        .bind(brand)
        .bind(title)
        .bind(review_score)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
