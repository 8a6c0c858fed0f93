//! Identity token claims

use serde::{Deserialize, Serialize};

/// Claims carried by a verified identity token.
///
/// `sub` is the authenticated user ID. The remaining fields are standard
/// registered claims; `email` is provider-specific and optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    pub iat: u64,
    pub exp: u64,
}
