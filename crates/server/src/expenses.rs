//! Expenses API endpoints.

use api_types::expense::{ExpenseCreate, ExpenseUpdate, ExpenseView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_expense(expense: engine::expenses::Model) -> ExpenseView {
    ExpenseView {
        uuid: expense.uuid,
        subcategory_uuid: expense.subcategory_uuid,
        vendor_uuid: expense.vendor_uuid,
        household_member_uuid: expense.household_member_uuid,
        fund_uuid: expense.fund_uuid,
        date: expense.date,
        amount_cents: expense.amount_cents,
        reimbursed_cents: expense.reimbursed_cents,
        description: expense.description,
        created_at: expense.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let mut cmd = engine::CreateExpenseCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.subcategory_uuid,
        payload.vendor_uuid,
        payload.household_member_uuid,
        payload.date,
        payload.amount_cents,
        payload.description,
    )
    .reimbursed_cents(payload.reimbursed_cents.unwrap_or(0));
    if let Some(fund_uuid) = payload.fund_uuid {
        cmd = cmd.fund_uuid(fund_uuid);
    }
    let expense = state.engine.create_expense(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseView>, ServerError> {
    let mut cmd = engine::UpdateExpenseCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.subcategory_uuid,
        payload.vendor_uuid,
        payload.household_member_uuid,
        payload.date,
        payload.amount_cents,
        payload.description,
    )
    .reimbursed_cents(payload.reimbursed_cents.unwrap_or(0));
    if let Some(fund_uuid) = payload.fund_uuid {
        cmd = cmd.fund_uuid(fund_uuid);
    }
    let expense = state.engine.update_expense(cmd).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_expense(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
