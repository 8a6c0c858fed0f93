//! Concrete authentication backend
//!
//! Wraps a `TokenVerifier` behind a cheaply clonable handle. Domain states
//! expose this via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::error::AuthError;
use crate::verifier::{TokenVerifier, VerifiedToken};

/// Concrete authentication backend
#[derive(Clone)]
pub struct AuthBackend {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthBackend {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Verify a bearer token and return the authenticated identity.
    ///
    /// A token that verifies but carries an empty user ID is rejected: every
    /// downstream operation keys on a non-empty actor ID.
    pub async fn verify_token(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        let verified = self.verifier.verify(token).await?;

        if verified.uid.is_empty() {
            tracing::warn!(
                verifier = self.verifier.verifier_name(),
                "Verified token carried an empty user ID"
            );
            return Err(AuthError::MissingUserId);
        }

        Ok(verified)
    }
}
