//! Core study group entities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric study group identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct StudyGroupId(pub i64);

impl fmt::Display for StudyGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudyGroupId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque user identifier issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Join policy of a study group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupType {
    /// Anyone may join directly
    Public,
    /// Joining requires admin approval
    Closed,
    /// Joining is by invitation only
    InviteOnly,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GroupType::Public => "public",
            GroupType::Closed => "closed",
            GroupType::InviteOnly => "invite-only",
        };
        write!(f, "{s}")
    }
}

/// Role a user holds within a study group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Admin,
    Member,
    Invitee,
    Requester,
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GroupRole::Admin => "admin",
            GroupRole::Member => "member",
            GroupRole::Invitee => "invitee",
            GroupRole::Requester => "requester",
        };
        write!(f, "{s}")
    }
}

/// A user's entry in a group roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub user_id: UserId,
    pub role: GroupRole,
}

/// Roster of group members, at most one entry per user.
///
/// Insertion order is preserved so listings stay deterministic. The
/// single-entry-per-user invariant is enforced structurally: `set_role`
/// replaces an existing entry in place instead of appending a second one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberRoster(Vec<Membership>);

impl MemberRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster containing only the group's creator as admin
    pub fn with_admin(creator: UserId) -> Self {
        Self(vec![Membership {
            user_id: creator,
            role: GroupRole::Admin,
        }])
    }

    /// The role the user currently holds, if any
    pub fn role_of(&self, user: &UserId) -> Option<GroupRole> {
        self.0
            .iter()
            .find(|m| &m.user_id == user)
            .map(|m| m.role)
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.role_of(user).is_some()
    }

    pub fn has_role(&self, user: &UserId, role: GroupRole) -> bool {
        self.role_of(user) == Some(role)
    }

    /// Assign a role, replacing the user's existing entry if present
    pub fn set_role(&mut self, user: UserId, role: GroupRole) {
        match self.0.iter_mut().find(|m| m.user_id == user) {
            Some(existing) => existing.role = role,
            None => self.0.push(Membership {
                user_id: user,
                role,
            }),
        }
    }

    /// Remove the user's entry. Returns whether an entry was removed.
    pub fn remove(&mut self, user: &UserId) -> bool {
        let before = self.0.len();
        self.0.retain(|m| &m.user_id != user);
        self.0.len() < before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Membership> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(UserId, GroupRole)> for MemberRoster {
    fn from_iter<I: IntoIterator<Item = (UserId, GroupRole)>>(iter: I) -> Self {
        let mut roster = Self::new();
        for (user, role) in iter {
            roster.set_role(user, role);
        }
        roster
    }
}

/// Descriptive fields of a study group, independent of membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroupDetails {
    pub name: String,
    pub description: String,
    pub group_type: GroupType,
    /// Course module this group studies, if any
    pub module_id: Option<String>,
}

/// A study group: identity, details, and membership roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: StudyGroupId,
    pub details: StudyGroupDetails,
    pub members: MemberRoster,
    /// Bumped by the store on every successful update. An update carrying a
    /// stale version is rejected, so concurrent read-modify-write cycles
    /// cannot silently lose each other's changes.
    pub version: u64,
}
