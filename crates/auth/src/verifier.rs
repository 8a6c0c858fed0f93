//! Token verifier seam
//!
//! The identity provider is an external collaborator: the backend only needs
//! "authenticated user ID available or request rejected". `TokenVerifier`
//! is the trait boundary; `JwtVerifier` validates signed tokens locally and
//! `StaticTokenVerifier` provides canned identities for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::validate_jwt_token;

/// Identity extracted from a successfully verified token
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    pub uid: String,
    pub email: Option<String>,
}

/// Verifies bearer tokens and yields the authenticated user ID
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError>;

    fn verifier_name(&self) -> &'static str;
}

/// Verifier backed by local JWT signature validation
#[derive(Debug, Clone)]
pub struct JwtVerifier {
    config: AuthConfig,
}

impl JwtVerifier {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;

        Ok(VerifiedToken {
            uid: claims.sub,
            email: claims.email,
        })
    }

    fn verifier_name(&self) -> &'static str {
        "jwt"
    }
}

/// Mock verifier mapping opaque token strings to fixed user IDs
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, VerifiedToken>,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token that resolves to the given user ID
    pub fn with_token(mut self, token: impl Into<String>, uid: impl Into<String>) -> Self {
        self.tokens.insert(
            token.into(),
            VerifiedToken {
                uid: uid.into(),
                email: None,
            },
        );
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }

    fn verifier_name(&self) -> &'static str {
        "static"
    }
}
