//! Application composition for StudyHub
//!
//! Wires the domain routers, their in-memory stores, and the auth backend
//! into a single axum `Router`. Stores are constructed once here and handed
//! to the services; nothing else holds state.

use std::sync::Arc;

use axum::Router;
use studyhub_auth::{AuthBackend, AuthConfig, JwtVerifier, TokenVerifier};
use studyhub_catalog::repository::{InMemoryModuleStore, InMemoryUserStore};
use studyhub_catalog::{CatalogState, ModuleService, UserService};
use studyhub_common::config::Config;
use studyhub_groups::repository::{InMemoryStudyGroupStore, NoopTransactionManager};
use studyhub_groups::{GroupsState, StudyGroupService};

/// Create the main application router with all routes
///
/// The token verifier is injected so tests can substitute canned
/// identities for real token verification.
pub fn create_app(verifier: Arc<dyn TokenVerifier>) -> Router {
    let auth = AuthBackend::new(verifier);

    let groups_state = GroupsState {
        service: Arc::new(StudyGroupService::new(
            Arc::new(NoopTransactionManager),
            Arc::new(InMemoryStudyGroupStore::seeded()),
        )),
        auth: auth.clone(),
    };

    let module_store = Arc::new(InMemoryModuleStore::seeded());
    let catalog_state = CatalogState {
        modules: Arc::new(ModuleService::new(module_store.clone())),
        users: Arc::new(UserService::new(
            Arc::new(InMemoryUserStore::new()),
            module_store,
        )),
        auth,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(studyhub_groups::routes().with_state(groups_state))
        .merge(studyhub_catalog::routes().with_state(catalog_state))
}

/// Create the application with JWT verification configured from `config`
pub fn create_app_from_config(config: &Config) -> Router {
    let verifier = JwtVerifier::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    });

    create_app(Arc::new(verifier))
}

async fn health_check() -> &'static str {
    "OK"
}
