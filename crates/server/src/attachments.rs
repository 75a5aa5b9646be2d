//! Attachments API endpoints.
//!
//! Only metadata is managed here; the payload upload happens against blob
//! storage, outside this service.

use api_types::attachment::{AttachmentCreate, AttachmentUpdate, AttachmentView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_attachment(attachment: engine::attachments::Model) -> AttachmentView {
    AttachmentView {
        uuid: attachment.uuid,
        entity_type: attachment.entity_type,
        entity_uuid: attachment.entity_uuid,
        name: attachment.name,
        created_at: attachment.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<AttachmentCreate>,
) -> Result<(StatusCode, Json<AttachmentView>), ServerError> {
    let cmd = engine::CreateAttachmentCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.expense_uuid,
        payload.name,
    );
    let attachment = state.engine.create_attachment(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_attachment(attachment))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<AttachmentUpdate>,
) -> Result<Json<AttachmentView>, ServerError> {
    let cmd = engine::UpdateAttachmentCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.name,
    );
    let attachment = state.engine.update_attachment(cmd).await?;
    Ok(Json(map_attachment(attachment)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_attachment(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
