//! Route definitions for the catalog domain

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{modules, users};
use super::middleware::CatalogState;

pub fn routes() -> Router<CatalogState> {
    Router::new()
        .route(
            "/api/modules",
            get(modules::list_modules).post(modules::create_module),
        )
        .route("/api/users", post(users::create_user))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/users/{id}/modules", put(users::set_user_modules))
}
