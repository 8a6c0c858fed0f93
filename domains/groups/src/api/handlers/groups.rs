//! Study group CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use studyhub_auth::AuthUser;
use studyhub_common::{Error, Result};
use validator::Validate;

use crate::api::middleware::GroupsState;
use crate::domain::{GroupType, StudyGroup, StudyGroupDetails, StudyGroupId, UserId};

/// Study group as exposed over the wire. Membership is intentionally not
/// part of this shape; rosters are mutated through member operations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroupResponse {
    pub id: StudyGroupId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
}

impl From<StudyGroup> for StudyGroupResponse {
    fn from(group: StudyGroup) -> Self {
        Self {
            id: group.id,
            name: group.details.name,
            description: group.details.description,
            group_type: group.details.group_type,
            module_id: group.details.module_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudyGroupDetailsRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    #[serde(default)]
    pub module_id: Option<String>,
}

impl From<StudyGroupDetailsRequest> for StudyGroupDetails {
    fn from(req: StudyGroupDetailsRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            group_type: req.group_type,
            module_id: req.module_id,
        }
    }
}

pub async fn get_study_group(
    _auth: AuthUser,
    State(state): State<GroupsState>,
    Path(id): Path<i64>,
) -> Result<Json<StudyGroupResponse>> {
    let group = state.service.get_study_group(StudyGroupId(id)).await?;
    Ok(Json(group.into()))
}

pub async fn list_study_groups(
    _auth: AuthUser,
    State(state): State<GroupsState>,
) -> Result<Json<Vec<StudyGroupResponse>>> {
    let groups = state.service.get_all_study_groups().await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

pub async fn create_study_group(
    auth: AuthUser,
    State(state): State<GroupsState>,
    Json(req): Json<StudyGroupDetailsRequest>,
) -> Result<Json<StudyGroupResponse>> {
    req.validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    let creator = UserId::new(auth.uid());
    let group = state
        .service
        .create_study_group(req.into(), creator)
        .await?;

    Ok(Json(group.into()))
}

pub async fn update_study_group(
    auth: AuthUser,
    State(state): State<GroupsState>,
    Path(id): Path<i64>,
    Json(req): Json<StudyGroupDetailsRequest>,
) -> Result<Json<StudyGroupResponse>> {
    req.validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    let requester = UserId::new(auth.uid());
    let group = state
        .service
        .update_study_group_details(StudyGroupId(id), req.into(), &requester)
        .await?;

    Ok(Json(group.into()))
}

pub async fn delete_study_group(
    auth: AuthUser,
    State(state): State<GroupsState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let requester = UserId::new(auth.uid());
    state
        .service
        .delete_study_group(StudyGroupId(id), &requester)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
