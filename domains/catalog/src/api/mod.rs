//! HTTP surface of the catalog domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::CatalogState;
pub use routes::routes;
