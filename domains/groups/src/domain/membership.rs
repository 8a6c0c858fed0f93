//! Membership state machine
//!
//! Pure role-transition rules for a study group roster. Each operation takes
//! the current group, validates its precondition, and returns the updated
//! roster without touching storage. The service layer persists the result
//! inside a transaction.

use std::fmt;

use studyhub_common::Error;

use super::entities::{GroupRole, GroupType, MemberRoster, StudyGroup, UserId};

/// Operation a user performs on their own membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfMemberOperation {
    AcceptInvite,
    RejectInvite,
    RequestToJoin,
    Leave,
}

impl fmt::Display for SelfMemberOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelfMemberOperation::AcceptInvite => "accept-invite",
            SelfMemberOperation::RejectInvite => "reject-invite",
            SelfMemberOperation::RequestToJoin => "request-to-join",
            SelfMemberOperation::Leave => "leave",
        };
        write!(f, "{s}")
    }
}

/// Operation an admin performs on another user's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMemberOperation {
    Invite,
    AcceptRequestToJoin,
    RejectRequestToJoin,
    RemoveMember,
}

impl fmt::Display for AdminMemberOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdminMemberOperation::Invite => "invite",
            AdminMemberOperation::AcceptRequestToJoin => "accept-request-to-join",
            AdminMemberOperation::RejectRequestToJoin => "reject-request-to-join",
            AdminMemberOperation::RemoveMember => "remove-member",
        };
        write!(f, "{s}")
    }
}

/// Apply an admin operation to the roster.
///
/// The admin role check happens before any operation-specific precondition:
/// a non-admin gets an authorization error even when the operation itself
/// would also have failed.
pub fn apply_admin_operation(
    group: &StudyGroup,
    operation: AdminMemberOperation,
    target: &UserId,
    admin: &UserId,
) -> Result<MemberRoster, Error> {
    if !group.members.has_role(admin, GroupRole::Admin) {
        return Err(Error::Authorization(
            "unauthorized member operation".to_owned(),
        ));
    }

    let mut roster = group.members.clone();

    match operation {
        AdminMemberOperation::Invite => {
            if roster.contains(target) {
                return Err(invalid_operation("member already exists in the study group"));
            }
            roster.set_role(target.clone(), GroupRole::Invitee);
        }
        AdminMemberOperation::AcceptRequestToJoin => {
            if !roster.has_role(target, GroupRole::Requester) {
                return Err(invalid_operation(
                    "member hasn't requested to join the study group",
                ));
            }
            roster.set_role(target.clone(), GroupRole::Member);
        }
        AdminMemberOperation::RejectRequestToJoin => {
            if !roster.has_role(target, GroupRole::Requester) {
                return Err(invalid_operation(
                    "member hasn't requested to join the study group",
                ));
            }
            roster.remove(target);
        }
        AdminMemberOperation::RemoveMember => {
            if target == admin {
                return Err(invalid_operation("cannot remove self from the study group"));
            }
            if !roster.remove(target) {
                return Err(invalid_operation("member not found in the study group"));
            }
        }
    }

    Ok(roster)
}

/// Apply a self-service operation to the roster.
pub fn apply_self_operation(
    group: &StudyGroup,
    operation: SelfMemberOperation,
    actor: &UserId,
) -> Result<MemberRoster, Error> {
    let mut roster = group.members.clone();

    match operation {
        SelfMemberOperation::AcceptInvite => {
            if !roster.has_role(actor, GroupRole::Invitee) {
                return Err(invalid_operation(
                    "member not invited to join the study group",
                ));
            }
            roster.set_role(actor.clone(), GroupRole::Member);
        }
        SelfMemberOperation::RejectInvite => {
            if !roster.has_role(actor, GroupRole::Invitee) {
                return Err(invalid_operation(
                    "member not invited to join the study group",
                ));
            }
            roster.remove(actor);
        }
        SelfMemberOperation::RequestToJoin => {
            if roster.contains(actor) {
                return Err(invalid_operation("member already exists in the study group"));
            }
            match group.details.group_type {
                GroupType::Public => roster.set_role(actor.clone(), GroupRole::Member),
                GroupType::Closed => roster.set_role(actor.clone(), GroupRole::Requester),
                GroupType::InviteOnly => {
                    return Err(invalid_operation("the study group is invite-only"));
                }
            }
        }
        SelfMemberOperation::Leave => {
            if !roster.remove(actor) {
                return Err(invalid_operation("not currently a member of the study group"));
            }
        }
    }

    Ok(roster)
}

fn invalid_operation(reason: &str) -> Error {
    Error::InvalidOperation(format!("invalid study group member operation: {reason}"))
}
