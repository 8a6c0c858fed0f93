//! Study group store
//!
//! `StudyGroupRepository` is the persistence seam; `InMemoryStudyGroupStore`
//! is the shipping implementation, a mutex-guarded map with an incrementing
//! ID counter.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    GroupRole, GroupType, MemberRoster, StudyGroup, StudyGroupDetails, StudyGroupId, UserId,
};

/// Errors surfaced by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("study group not found")]
    NotFound,
    #[error("study group was modified concurrently")]
    VersionConflict,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for studyhub_common::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => {
                studyhub_common::Error::NotFound("study group not found".to_owned())
            }
            StoreError::VersionConflict => {
                studyhub_common::Error::Conflict("study group was modified concurrently".to_owned())
            }
            StoreError::Internal(source) => studyhub_common::Error::Unexpected(source),
        }
    }
}

#[async_trait]
pub trait StudyGroupRepository: Send + Sync {
    async fn get_by_id(&self, id: StudyGroupId) -> Result<StudyGroup, StoreError>;

    async fn get_all(&self) -> Result<Vec<StudyGroup>, StoreError>;

    async fn create(
        &self,
        details: StudyGroupDetails,
        admin: UserId,
    ) -> Result<StudyGroup, StoreError>;

    async fn update(&self, group: StudyGroup) -> Result<StudyGroup, StoreError>;

    async fn delete(&self, id: StudyGroupId) -> Result<(), StoreError>;
}

struct StoreInner {
    groups: HashMap<StudyGroupId, StudyGroup>,
    counter: i64,
}

/// In-memory store with seeded fixture data
pub struct InMemoryStudyGroupStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStudyGroupStore {
    /// Empty store, first created group gets ID 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                groups: HashMap::new(),
                counter: 1,
            }),
        }
    }

    /// Store preloaded with fixture groups, next created group gets ID 7
    pub fn seeded() -> Self {
        let groups = seed_groups();
        let counter = groups.keys().map(|id| id.0).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(StoreInner { groups, counter }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreInner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Internal(anyhow::anyhow!("study group store lock poisoned")))
    }
}

impl Default for InMemoryStudyGroupStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudyGroupRepository for InMemoryStudyGroupStore {
    async fn get_by_id(&self, id: StudyGroupId) -> Result<StudyGroup, StoreError> {
        let inner = self.lock()?;
        inner.groups.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<StudyGroup>, StoreError> {
        let inner = self.lock()?;
        let mut groups: Vec<StudyGroup> = inner.groups.values().cloned().collect();
        groups.sort_by_key(|g| g.id);
        Ok(groups)
    }

    async fn create(
        &self,
        details: StudyGroupDetails,
        admin: UserId,
    ) -> Result<StudyGroup, StoreError> {
        let mut inner = self.lock()?;

        let id = StudyGroupId(inner.counter);
        inner.counter += 1;

        let group = StudyGroup {
            id,
            details,
            members: MemberRoster::with_admin(admin),
            version: 0,
        };
        inner.groups.insert(id, group.clone());

        Ok(group)
    }

    /// Persist an updated snapshot. The snapshot's version must match the
    /// stored one; a mismatch means another writer got in between this
    /// caller's load and its update.
    async fn update(&self, group: StudyGroup) -> Result<StudyGroup, StoreError> {
        let mut inner = self.lock()?;

        let stored = inner.groups.get(&group.id).ok_or(StoreError::NotFound)?;
        if stored.version != group.version {
            return Err(StoreError::VersionConflict);
        }

        let group = StudyGroup {
            version: group.version + 1,
            ..group
        };
        inner.groups.insert(group.id, group.clone());

        Ok(group)
    }

    async fn delete(&self, id: StudyGroupId) -> Result<(), StoreError> {
        let mut inner = self.lock()?;

        if inner.groups.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

fn seed_groups() -> HashMap<StudyGroupId, StudyGroup> {
    fn group(
        id: i64,
        name: &str,
        description: &str,
        module_id: &str,
        members: &[(&str, GroupRole)],
    ) -> (StudyGroupId, StudyGroup) {
        (
            StudyGroupId(id),
            StudyGroup {
                id: StudyGroupId(id),
                details: StudyGroupDetails {
                    name: name.to_owned(),
                    description: description.to_owned(),
                    group_type: GroupType::Public,
                    module_id: Some(module_id.to_owned()),
                },
                members: members
                    .iter()
                    .map(|(user, role)| (UserId::new(*user), *role))
                    .collect(),
                version: 0,
            },
        )
    }

    use GroupRole::{Admin, Member};

    HashMap::from([
        group(
            1,
            "Tech Nerds",
            "A group for tech enthusiasts who love to explore new technologies and innovations.",
            "CSU44052",
            &[
                ("Alice", Admin),
                ("Bob", Member),
                ("Charlie", Member),
                ("Maria", Member),
                ("Catriona", Member),
            ],
        ),
        group(
            2,
            "CS Wizards",
            "A group for computer science wizards who excel in coding and problem-solving.",
            "CSU44051",
            &[("David", Admin), ("Eve", Member), ("Frank", Member)],
        ),
        group(
            3,
            "The Elites",
            "A group for elite students who aim for excellence in their academic pursuits.",
            "CSU44052",
            &[("Grace", Admin), ("Hannah", Member), ("Ian", Member)],
        ),
        group(
            4,
            "The Fun Group",
            "A group for students who believe in having fun while learning and collaborating.",
            "CSU44061",
            &[
                ("Jack", Admin),
                ("Kate", Member),
                ("Leo", Member),
                ("Blake", Member),
                ("Robert", Member),
                ("Marco", Member),
            ],
        ),
        group(
            5,
            "The Prefects",
            "A group for prefects who lead by example and strive for academic and personal growth.",
            "CSU44051",
            &[
                ("Mike", Admin),
                ("Nina", Member),
                ("Oscar", Member),
                ("Alessandro", Member),
                ("Alice", Member),
                ("David", Member),
                ("Grace", Member),
                ("Ava", Member),
            ],
        ),
        group(
            6,
            "Trinners for Winners",
            "A group for final year project students who are dedicated to achieving outstanding results.",
            "CSU44099",
            &[
                ("Paul", Admin),
                ("Quinn", Member),
                ("Rachel", Member),
                ("Jade", Member),
                ("Robert", Member),
                ("Bob", Member),
                ("Hannah", Member),
                ("Bianca", Member),
                ("Oscar", Member),
                ("Ava", Member),
            ],
        ),
    ])
}
