use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    db::DbPool,
    dto::clients::{ClientList, ClientResponse, RegisterClientRequest, UpdateClientRequest},
    error::{AppResult, ErrorBody},
    routes::params::ClientListQuery,
    services::client_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/list", get(list_clients))
        .route("/register", post(register_client))
        .route("/update/{id}", put(update_client))
        .route("/delete/{id}", delete(delete_client))
        .route("/{id}", get(get_client))
}

#[utoipa::path(
    get,
    path = "/client/list",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1; 20 clients per page"),
    ),
    responses(
        (status = 200, description = "Clients in creation order, favorites expanded", body = ClientList),
    ),
    tag = "Clients"
)]
pub async fn list_clients(
    State(pool): State<DbPool>,
    Query(query): Query<ClientListQuery>,
) -> AppResult<Json<ClientList>> {
    let clients = client_service::list_clients(&pool, query).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    get,
    path = "/client/{id}",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 200, description = "Client with favorites expanded", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<ClientResponse>> {
    let client = client_service::get_client(&pool, id).await?;
    Ok(Json(client))
}

#[utoipa::path(
    post,
    path = "/client/register",
    request_body = RegisterClientRequest,
    responses(
        (status = 201, description = "Created client with an empty favorites list", body = ClientResponse),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 422, description = "Field constraint violated", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn register_client(
    State(pool): State<DbPool>,
    Json(payload): Json<RegisterClientRequest>,
) -> AppResult<(StatusCode, Json<ClientResponse>)> {
    payload.validate()?;
    let client = client_service::register_client(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    put,
    path = "/client/update/{id}",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client with favorites expanded", body = ClientResponse),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 409, description = "Email belongs to another client", body = ErrorBody),
        (status = 422, description = "Field constraint violated", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientRequest>,
) -> AppResult<Json<ClientResponse>> {
    payload.validate()?;
    let client = client_service::update_client(&pool, id, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/client/delete/{id}",
    params(
        ("id" = i32, Path, description = "Client ID"),
    ),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    client_service::delete_client(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
