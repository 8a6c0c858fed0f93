//! Route definitions for the groups domain

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, groups, members};
use super::middleware::GroupsState;

pub fn routes() -> Router<GroupsState> {
    Router::new()
        .route(
            "/api/study-groups",
            get(groups::list_study_groups).post(groups::create_study_group),
        )
        .route(
            "/api/study-groups/{id}",
            get(groups::get_study_group)
                .put(groups::update_study_group)
                .delete(groups::delete_study_group),
        )
        .route(
            "/api/study-groups/{id}/members/{command}",
            post(members::member_operation),
        )
        .route("/api/auth/verify", post(auth::verify))
}
