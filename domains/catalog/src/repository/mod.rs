//! Persistence seams for the catalog domain

pub mod modules;
pub mod users;

pub use modules::{InMemoryModuleStore, ModuleRepository};
pub use users::{InMemoryUserStore, UserRepository};

/// Errors surfaced by the catalog stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("module not found")]
    ModuleNotFound,
    #[error("module already exists")]
    ModuleAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for studyhub_common::Error {
    fn from(err: StoreError) -> Self {
        use studyhub_common::Error;

        match err {
            StoreError::ModuleNotFound => Error::NotFound("module not found".to_owned()),
            StoreError::UserNotFound => Error::NotFound("user not found".to_owned()),
            StoreError::ModuleAlreadyExists => Error::Conflict("module already exists".to_owned()),
            StoreError::UserAlreadyExists => Error::Conflict("user already exists".to_owned()),
            StoreError::Internal(source) => Error::Unexpected(source),
        }
    }
}
