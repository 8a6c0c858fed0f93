//! Verifier configuration

/// Settings for local bearer-token verification.
///
/// The shared secret validates HS256 signatures; issuer and audience are
/// only enforced when set, so development tokens minted without them still
/// verify.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Config that checks the signature only, with no issuer or audience
    /// claims expected. Intended for tests and local development.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            issuer: None,
            audience: None,
        }
    }
}
