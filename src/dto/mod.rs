pub mod clients;
pub mod products;
