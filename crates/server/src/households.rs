//! Household API endpoints.

use api_types::household::{HouseholdUpdate, HouseholdView};
use axum::{Extension, Json, extract::State};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<HouseholdUpdate>,
) -> Result<Json<HouseholdView>, ServerError> {
    let household = state
        .engine
        .update_household(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok(Json(HouseholdView {
        uuid: household.uuid,
        name: household.name,
        created_at: household.created_at,
    }))
}
