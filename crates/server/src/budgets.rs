//! Budgets API endpoints.

use api_types::budget::{BudgetCreate, BudgetUpdate, BudgetView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_budget(budget: engine::budgets::Model) -> BudgetView {
    BudgetView {
        uuid: budget.uuid,
        subcategory_uuid: budget.subcategory_uuid,
        month: budget.month,
        year: budget.year,
        amount_cents: budget.amount_cents,
        notes: budget.notes,
        created_at: budget.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<BudgetCreate>,
) -> Result<(StatusCode, Json<BudgetView>), ServerError> {
    let cmd = engine::CreateBudgetCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.subcategory_uuid,
        payload.month,
        payload.year,
        payload.amount_cents,
    )
    .notes(payload.notes.unwrap_or_default());
    let budget = state.engine.create_budget(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_budget(budget))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<BudgetUpdate>,
) -> Result<Json<BudgetView>, ServerError> {
    let cmd = engine::UpdateBudgetCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.subcategory_uuid,
        payload.month,
        payload.year,
        payload.amount_cents,
    )
    .notes(payload.notes.unwrap_or_default());
    let budget = state.engine.update_budget(cmd).await?;
    Ok(Json(map_budget(budget)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_budget(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
