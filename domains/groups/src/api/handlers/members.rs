//! Member operation dispatch
//!
//! A single endpoint takes the operation name as a path segment and routes
//! it to the self-service or admin side of the service. Admin operations
//! require a target user in the body; self operations take no body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use studyhub_auth::AuthUser;
use studyhub_common::{Error, Result};

use crate::api::middleware::GroupsState;
use crate::domain::membership::{AdminMemberOperation, SelfMemberOperation};
use crate::domain::{StudyGroupId, UserId};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberOperationRequest {
    #[serde(default)]
    pub target_user_id: Option<String>,
}

enum MemberCommand {
    SelfOp(SelfMemberOperation),
    AdminOp(AdminMemberOperation),
}

fn parse_command(command: &str) -> Option<MemberCommand> {
    let parsed = match command {
        "accept-invite" => MemberCommand::SelfOp(SelfMemberOperation::AcceptInvite),
        "reject-invite" => MemberCommand::SelfOp(SelfMemberOperation::RejectInvite),
        "request-to-join" => MemberCommand::SelfOp(SelfMemberOperation::RequestToJoin),
        "leave" => MemberCommand::SelfOp(SelfMemberOperation::Leave),
        "invite" => MemberCommand::AdminOp(AdminMemberOperation::Invite),
        "accept-request-to-join" => {
            MemberCommand::AdminOp(AdminMemberOperation::AcceptRequestToJoin)
        }
        "reject-request-to-join" => {
            MemberCommand::AdminOp(AdminMemberOperation::RejectRequestToJoin)
        }
        "remove-member" => MemberCommand::AdminOp(AdminMemberOperation::RemoveMember),
        _ => return None,
    };
    Some(parsed)
}

pub async fn member_operation(
    auth: AuthUser,
    State(state): State<GroupsState>,
    Path((id, command)): Path<(i64, String)>,
    body: Option<Json<MemberOperationRequest>>,
) -> Result<StatusCode> {
    let group_id = StudyGroupId(id);
    let actor = UserId::new(auth.uid());

    match parse_command(&command) {
        Some(MemberCommand::SelfOp(operation)) => {
            state
                .service
                .handle_self_member_operation(operation, group_id, &actor)
                .await?;
        }
        Some(MemberCommand::AdminOp(operation)) => {
            let target = body
                .and_then(|Json(req)| req.target_user_id)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    Error::Validation("invalid request payload: targetUserId is required".to_owned())
                })?;

            state
                .service
                .handle_admin_member_operation(operation, group_id, &UserId::new(target), &actor)
                .await?;
        }
        None => {
            return Err(Error::Validation(format!("invalid command: {command}")));
        }
    }

    Ok(StatusCode::OK)
}
