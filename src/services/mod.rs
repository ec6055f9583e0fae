pub mod client_service;
pub mod product_service;
