//! Household members API endpoints.

use api_types::household_member::{
    HouseholdMemberCreate, HouseholdMemberUpdate, HouseholdMemberView,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_member(member: engine::household_members::Model) -> HouseholdMemberView {
    HouseholdMemberView {
        uuid: member.uuid,
        name: member.name,
        created_at: member.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<HouseholdMemberCreate>,
) -> Result<(StatusCode, Json<HouseholdMemberView>), ServerError> {
    let member = state
        .engine
        .create_household_member(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(map_member(member))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<HouseholdMemberUpdate>,
) -> Result<Json<HouseholdMemberView>, ServerError> {
    let member = state
        .engine
        .update_household_member(&ctx.audit_api_call_uuid, &uuid, &payload.name)
        .await?;
    Ok(Json(map_member(member)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_household_member(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
