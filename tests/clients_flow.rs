use axum_favorites_api::{
    db::{DbPool, create_pool},
    dto::{
        clients::{ClientResponse, RegisterClientRequest, UpdateClientRequest},
        products::RegisterProductRequest,
    },
    error::AppError,
    routes::params::ClientListQuery,
    services::{client_service, product_service},
};

// Integration flow: register -> list -> favorites update -> delete.
#[tokio::test]
async fn register_list_update_delete_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = setup(&database_url).await?;

    // Register the four known clients, in order.
    let kassio = register(&pool, "Kassio", "kassio@mail.com").await?;
    let jp = register(&pool, "Joao Pedro", "jp@mail.com").await?;
    register(&pool, "Gustavo", "gustavo@mail.com").await?;
    register(&pool, "Eliza", "eliza@mail.com").await?;

    assert_eq!(kassio.id, 1);
    assert!(kassio.favorite_products.is_empty());

    // Listed in creation order, ids 1-4, all with empty favorites.
    let listed = client_service::list_clients(&pool, ClientListQuery { page: None }).await?;
    assert_eq!(
        listed.items.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(listed.items[0].name, "Kassio");
    assert_eq!(listed.items[3].email, "eliza@mail.com");
    assert!(listed.items.iter().all(|c| c.favorite_products.is_empty()));

    // One page of data; page 2 is empty, not an error.
    let page2 = client_service::list_clients(&pool, ClientListQuery { page: Some(2) }).await?;
    assert!(page2.items.is_empty());

    // Same email, different name: still a conflict.
    let dup = register(&pool, "Someone Else", "kassio@mail.com").await;
    let err = dup.expect_err("duplicate email must be rejected");
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Email already registered.");

    // Get-by-id round trip.
    let fetched = client_service::get_client(&pool, kassio.id).await?;
    assert_eq!(fetched.name, "Kassio");
    assert_eq!(fetched.email, "kassio@mail.com");
    assert!(fetched.favorite_products.is_empty());

    // Favorites update: unknown ids are dropped, duplicates collapse.
    let p1 = product_service::register_product(&pool, sample_product("Title 1")).await?;
    let p2 = product_service::register_product(&pool, sample_product("Title 2")).await?;

    let updated = client_service::update_client(
        &pool,
        kassio.id,
        UpdateClientRequest {
            name: "Kassio".into(),
            email: "kassio@mail.com".into(),
            favorite_products: vec![p2.id, p1.id, 9999, p1.id],
        },
    )
    .await?;
    let mut favorite_ids: Vec<i32> = updated.favorite_products.iter().map(|p| p.id).collect();
    favorite_ids.sort();
    assert_eq!(favorite_ids, vec![p1.id, p2.id]);

    // Keeping the same email on update must not conflict with itself.
    let same_email = client_service::update_client(
        &pool,
        kassio.id,
        UpdateClientRequest {
            name: "Kassio Updated".into(),
            email: "kassio@mail.com".into(),
            favorite_products: vec![p1.id],
        },
    )
    .await?;
    assert_eq!(same_email.name, "Kassio Updated");
    assert_eq!(same_email.favorite_products.len(), 1);

    // Another client's email is a conflict.
    let stolen = client_service::update_client(
        &pool,
        kassio.id,
        UpdateClientRequest {
            name: "Kassio".into(),
            email: jp.email.clone(),
            favorite_products: vec![],
        },
    )
    .await;
    assert!(matches!(stolen, Err(AppError::Conflict(_))));

    // Updating a missing client is NotFound.
    let missing = client_service::update_client(
        &pool,
        9999,
        UpdateClientRequest {
            name: "Ghost".into(),
            email: "ghost@mail.com".into(),
            favorite_products: vec![],
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Delete succeeds once, then the id is gone.
    client_service::delete_client(&pool, kassio.id).await?;
    let second = client_service::delete_client(&pool, kassio.id).await;
    let err = second.expect_err("second delete must fail");
    assert_eq!(err.to_string(), "Client not found.");

    let gone = client_service::get_client(&pool, kassio.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));

    Ok(())
}

async fn setup(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query("TRUNCATE TABLE client_product, client, product RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    Ok(pool)
}

async fn register(pool: &DbPool, name: &str, email: &str) -> Result<ClientResponse, AppError> {
    client_service::register_client(
        pool,
        RegisterClientRequest {
            name: name.into(),
            email: email.into(),
        },
    )
    .await
}

fn sample_product(title: &str) -> RegisterProductRequest {
    RegisterProductRequest {
        price: 5000.0,
        image: "img001.jpg".into(),
        brand: "Brand 1".into(),
        title: title.into(),
        review_score: 4.75,
    }
}
