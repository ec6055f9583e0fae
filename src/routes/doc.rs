use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        clients::{ClientList, ClientResponse, RegisterClientRequest, UpdateClientRequest},
        products::{ProductList, RegisterProductRequest},
    },
    error::ErrorBody,
    models::Product,
    routes::{clients, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        clients::list_clients,
        clients::get_client,
        clients::register_client,
        clients::update_client,
        clients::delete_client,
        products::list_products,
        products::get_product,
        products::register_product,
        products::delete_product,
    ),
    components(
        schemas(
            Product,
            ClientResponse,
            ClientList,
            ProductList,
            RegisterClientRequest,
            UpdateClientRequest,
            RegisterProductRequest,
            params::ClientListQuery,
            params::ProductListQuery,
            ErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Clients", description = "Client endpoints"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
