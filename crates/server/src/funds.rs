//! Funds and deposits API endpoints.

use api_types::fund::{
    DepositCreate, DepositUpdate, DepositView, FundCreate, FundUpdate, FundView,
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

fn map_fund(fund: engine::funds::Model) -> FundView {
    FundView {
        uuid: fund.uuid,
        name: fund.name,
        balance_cents: fund.balance_cents,
        created_at: fund.created_at,
    }
}

fn map_deposit(deposit: engine::deposits::Model) -> DepositView {
    DepositView {
        uuid: deposit.uuid,
        fund_uuid: deposit.fund_uuid,
        date: deposit.date,
        amount_cents: deposit.amount_cents,
        created_at: deposit.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<FundCreate>,
) -> Result<(StatusCode, Json<FundView>), ServerError> {
    let fund = state
        .engine
        .create_fund(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(map_fund(fund))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<FundUpdate>,
) -> Result<Json<FundView>, ServerError> {
    let fund = state
        .engine
        .update_fund(&ctx.audit_api_call_uuid, &uuid, &payload.name)
        .await?;
    Ok(Json(map_fund(fund)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_fund(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_deposit(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<DepositCreate>,
) -> Result<(StatusCode, Json<DepositView>), ServerError> {
    let cmd = engine::CreateDepositCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.fund_uuid,
        payload.date,
        payload.amount_cents,
    );
    let deposit = state.engine.create_deposit(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_deposit(deposit))))
}

pub async fn update_deposit(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<DepositUpdate>,
) -> Result<Json<DepositView>, ServerError> {
    let cmd = engine::UpdateDepositCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.fund_uuid,
        payload.date,
        payload.amount_cents,
    );
    let deposit = state.engine.update_deposit(cmd).await?;
    Ok(Json(map_deposit(deposit)))
}

pub async fn remove_deposit(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_deposit(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
