//! Shared state for the groups API

use std::sync::Arc;

use axum::extract::FromRef;
use studyhub_auth::AuthBackend;

use crate::service::StudyGroupService;

#[derive(Clone)]
pub struct GroupsState {
    pub service: Arc<StudyGroupService>,
    pub auth: AuthBackend,
}

impl FromRef<GroupsState> for AuthBackend {
    fn from_ref(state: &GroupsState) -> Self {
        state.auth.clone()
    }
}
