//! Token verification endpoint
//!
//! Lets a client check its bearer token before making other calls. The
//! `AuthUser` extractor does the actual work; reaching the handler body
//! means the token verified.

use axum::Json;
use serde_json::{json, Value};
use studyhub_auth::AuthUser;

pub async fn verify(auth: AuthUser) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uid": auth.uid(),
    }))
}
