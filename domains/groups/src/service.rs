//! Study group service
//!
//! Orchestrates repository access, authorization, and the membership state
//! machine. Every operation runs inside a transaction; storage failures that
//! are not domain errors get wrapped with a description of the attempted
//! operation.

use std::sync::Arc;

use studyhub_common::{Error, Result};

use crate::domain::membership::{
    apply_admin_operation, apply_self_operation, AdminMemberOperation, SelfMemberOperation,
};
use crate::domain::{GroupRole, StudyGroup, StudyGroupDetails, StudyGroupId, UserId};
use crate::repository::{with_transaction, StoreError, StudyGroupRepository, TransactionManager};

pub struct StudyGroupService {
    tx_manager: Arc<dyn TransactionManager>,
    repo: Arc<dyn StudyGroupRepository>,
}

impl StudyGroupService {
    pub fn new(
        tx_manager: Arc<dyn TransactionManager>,
        repo: Arc<dyn StudyGroupRepository>,
    ) -> Self {
        Self { tx_manager, repo }
    }

    pub async fn get_study_group(&self, id: StudyGroupId) -> Result<StudyGroup> {
        with_transaction(self.tx_manager.as_ref(), || async {
            self.repo
                .get_by_id(id)
                .await
                .map_err(resolve("fetching study group"))
        })
        .await
    }

    pub async fn get_all_study_groups(&self) -> Result<Vec<StudyGroup>> {
        with_transaction(self.tx_manager.as_ref(), || async {
            self.repo
                .get_all()
                .await
                .map_err(resolve("fetching study groups"))
        })
        .await
    }

    pub async fn create_study_group(
        &self,
        details: StudyGroupDetails,
        creator: UserId,
    ) -> Result<StudyGroup> {
        with_transaction(self.tx_manager.as_ref(), || async {
            self.repo
                .create(details, creator)
                .await
                .map_err(resolve("creating study group"))
        })
        .await
    }

    /// Update a group's descriptive fields. Admin only.
    pub async fn update_study_group_details(
        &self,
        id: StudyGroupId,
        details: StudyGroupDetails,
        requester: &UserId,
    ) -> Result<StudyGroup> {
        with_transaction(self.tx_manager.as_ref(), || async {
            let mut group = self
                .repo
                .get_by_id(id)
                .await
                .map_err(resolve("updating study group details"))?;

            ensure_admin(&group, requester)?;

            group.details = details;

            self.repo
                .update(group)
                .await
                .map_err(resolve("updating study group details"))
        })
        .await
    }

    /// Delete a group. Admin only.
    pub async fn delete_study_group(&self, id: StudyGroupId, requester: &UserId) -> Result<()> {
        with_transaction(self.tx_manager.as_ref(), || async {
            let group = self
                .repo
                .get_by_id(id)
                .await
                .map_err(resolve("deleting study group"))?;

            ensure_admin(&group, requester)?;

            self.repo
                .delete(id)
                .await
                .map_err(resolve("deleting study group"))
        })
        .await
    }

    /// Apply an admin-initiated roster operation to another user.
    pub async fn handle_admin_member_operation(
        &self,
        operation: AdminMemberOperation,
        group_id: StudyGroupId,
        target: &UserId,
        admin: &UserId,
    ) -> Result<()> {
        let context = format!("executing admin member operation {operation}");
        self.apply_roster_update(group_id, &context, |group| {
            apply_admin_operation(group, operation, target, admin)
        })
        .await
    }

    /// Apply a self-service roster operation for the acting user.
    pub async fn handle_self_member_operation(
        &self,
        operation: SelfMemberOperation,
        group_id: StudyGroupId,
        actor: &UserId,
    ) -> Result<()> {
        let context = format!("executing member operation {operation}");
        self.apply_roster_update(group_id, &context, |group| {
            apply_self_operation(group, operation, actor)
        })
        .await
    }

    /// Load, transition, persist. The store rejects updates carrying a stale
    /// version, so on a conflict the whole cycle re-runs against a fresh
    /// snapshot instead of losing a concurrent writer's changes.
    async fn apply_roster_update<F>(
        &self,
        group_id: StudyGroupId,
        context: &str,
        transition: F,
    ) -> Result<()>
    where
        F: Fn(&StudyGroup) -> Result<crate::domain::MemberRoster>,
    {
        with_transaction(self.tx_manager.as_ref(), || async {
            for _ in 0..MAX_UPDATE_ATTEMPTS {
                let group = self
                    .repo
                    .get_by_id(group_id)
                    .await
                    .map_err(resolve(context))?;

                let members = transition(&group)?;

                match self.repo.update(StudyGroup { members, ..group }).await {
                    Ok(_) => return Ok(()),
                    Err(StoreError::VersionConflict) => continue,
                    Err(err) => return Err(resolve(context)(err)),
                }
            }

            Err(Error::Conflict(
                "study group was modified concurrently".to_owned(),
            ))
        })
        .await
    }
}

const MAX_UPDATE_ATTEMPTS: usize = 3;

fn ensure_admin(group: &StudyGroup, requester: &UserId) -> Result<()> {
    if !group.members.has_role(requester, GroupRole::Admin) {
        return Err(Error::Authorization(
            "unauthorized member operation".to_owned(),
        ));
    }
    Ok(())
}

/// Map store errors to domain errors, attaching operation context to
/// anything that is not a plain missing-group case.
fn resolve(operation: &str) -> impl FnOnce(StoreError) -> Error + '_ {
    move |err| match err {
        StoreError::NotFound => Error::NotFound("study group not found".to_owned()),
        StoreError::VersionConflict => {
            Error::Conflict("study group was modified concurrently".to_owned())
        }
        other => Error::operation(operation, other),
    }
}
