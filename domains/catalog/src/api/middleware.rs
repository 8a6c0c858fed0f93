//! Shared state for the catalog API

use std::sync::Arc;

use axum::extract::FromRef;
use studyhub_auth::AuthBackend;

use crate::service::{ModuleService, UserService};

#[derive(Clone)]
pub struct CatalogState {
    pub modules: Arc<ModuleService>,
    pub users: Arc<UserService>,
    pub auth: AuthBackend,
}

impl FromRef<CatalogState> for AuthBackend {
    fn from_ref(state: &CatalogState) -> Self {
        state.auth.clone()
    }
}
