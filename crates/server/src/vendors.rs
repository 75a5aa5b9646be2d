//! Vendors API endpoints.

use api_types::vendor::{VendorCreate, VendorUpdate, VendorView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_vendor(vendor: engine::vendors::Model) -> VendorView {
    VendorView {
        uuid: vendor.uuid,
        name: vendor.name,
        created_at: vendor.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<VendorCreate>,
) -> Result<(StatusCode, Json<VendorView>), ServerError> {
    let vendor = state
        .engine
        .create_vendor(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(map_vendor(vendor))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<VendorUpdate>,
) -> Result<Json<VendorView>, ServerError> {
    let vendor = state
        .engine
        .update_vendor(&ctx.audit_api_call_uuid, &uuid, &payload.name)
        .await?;
    Ok(Json(map_vendor(vendor)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_vendor(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
