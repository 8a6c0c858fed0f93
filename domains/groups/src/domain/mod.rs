//! Study group domain model

pub mod entities;
pub mod membership;

pub use entities::{
    GroupRole, GroupType, MemberRoster, Membership, StudyGroup, StudyGroupDetails, StudyGroupId,
    UserId,
};
pub use membership::{AdminMemberOperation, SelfMemberOperation};
