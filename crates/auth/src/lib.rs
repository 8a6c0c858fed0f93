//! Authentication middleware for StudyHub
//!
//! Bearer token verification behind a `TokenVerifier` seam, with an axum
//! `AuthUser` extractor that rejects requests lacking a verifiable identity.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod jwt;
mod verifier;

pub use backend::AuthBackend;
pub use claims::IdTokenClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use verifier::{JwtVerifier, StaticTokenVerifier, TokenVerifier, VerifiedToken};
