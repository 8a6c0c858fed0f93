//! Module catalogue handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use studyhub_auth::AuthUser;
use studyhub_common::{Error, Result};
use validator::Validate;

use crate::api::middleware::CatalogState;
use crate::domain::Module;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateModuleRequest {
    #[validate(length(min = 1, max = 20, message = "id must be 1-20 characters"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

pub async fn list_modules(
    _auth: AuthUser,
    State(state): State<CatalogState>,
) -> Result<Json<Vec<Module>>> {
    let modules = state.modules.get_all_modules().await?;
    Ok(Json(modules))
}

pub async fn create_module(
    _auth: AuthUser,
    State(state): State<CatalogState>,
    Json(req): Json<CreateModuleRequest>,
) -> Result<StatusCode> {
    req.validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    state.modules.create_module(req.id, req.name).await?;

    Ok(StatusCode::CREATED)
}
