//! HTTP surface of the groups domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::GroupsState;
pub use routes::routes;
