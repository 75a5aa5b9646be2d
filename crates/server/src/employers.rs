//! Employers API endpoints.

use api_types::employer::{EmployerCreate, EmployerUpdate, EmployerView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_employer(employer: engine::employers::Model) -> EmployerView {
    EmployerView {
        uuid: employer.uuid,
        name: employer.name,
        created_at: employer.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<EmployerCreate>,
) -> Result<(StatusCode, Json<EmployerView>), ServerError> {
    let employer = state
        .engine
        .create_employer(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(map_employer(employer))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<EmployerUpdate>,
) -> Result<Json<EmployerView>, ServerError> {
    let employer = state
        .engine
        .update_employer(&ctx.audit_api_call_uuid, &uuid, &payload.name)
        .await?;
    Ok(Json(map_employer(employer)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_employer(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
