//! User profile handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use studyhub_auth::AuthUser;
use studyhub_common::{Error, Result};
use validator::Validate;

use crate::api::middleware::CatalogState;
use crate::domain::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Defaults to the authenticated user's ID when omitted
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ModulePreferences {
    #[serde(rename = "selectedModules")]
    pub ids: Vec<String>,
}

pub async fn get_user(
    _auth: AuthUser,
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user = state.users.get_user(&id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    auth: AuthUser,
    State(state): State<CatalogState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    req.validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    let id = req
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| auth.uid().to_owned());

    let user = state
        .users
        .create_user(User {
            id,
            name: req.name,
            modules: Vec::new(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn set_user_modules(
    _auth: AuthUser,
    State(state): State<CatalogState>,
    Path(id): Path<String>,
    Json(prefs): Json<ModulePreferences>,
) -> Result<StatusCode> {
    tracing::debug!(user = %id, modules = ?prefs.ids, "Replacing module selection");
    state.users.set_modules(&id, &prefs.ids).await?;
    Ok(StatusCode::OK)
}
