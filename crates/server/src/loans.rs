//! Loans and loan payments API endpoints.

use api_types::loan::{
    LoanCreate, LoanPaymentCreate, LoanPaymentUpdate, LoanPaymentView, LoanUpdate, LoanView,
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

fn map_loan(loan: engine::loans::Model) -> LoanView {
    LoanView {
        uuid: loan.uuid,
        name: loan.name,
        amount_cents: loan.amount_cents,
        balance_cents: loan.balance_cents,
        archived_at: loan.archived_at,
        created_at: loan.created_at,
    }
}

fn map_payment(payment: engine::loan_payments::Model) -> LoanPaymentView {
    LoanPaymentView {
        uuid: payment.uuid,
        loan_uuid: payment.loan_uuid,
        date: payment.date,
        principal_amount_cents: payment.principal_amount_cents,
        interest_amount_cents: payment.interest_amount_cents,
        created_at: payment.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<LoanCreate>,
) -> Result<(StatusCode, Json<LoanView>), ServerError> {
    let cmd = engine::CreateLoanCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.name,
        payload.amount_cents,
    );
    let loan = state.engine.create_loan(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_loan(loan))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<LoanUpdate>,
) -> Result<Json<LoanView>, ServerError> {
    let cmd = engine::UpdateLoanCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.name,
        payload.amount_cents,
    );
    let loan = state.engine.update_loan(cmd).await?;
    Ok(Json(map_loan(loan)))
}

pub async fn archive(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<Json<LoanView>, ServerError> {
    let loan = state
        .engine
        .archive_loan(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(Json(map_loan(loan)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_loan(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_payment(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<LoanPaymentCreate>,
) -> Result<(StatusCode, Json<LoanPaymentView>), ServerError> {
    let cmd = engine::CreateLoanPaymentCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.loan_uuid,
        payload.date,
        payload.principal_amount_cents,
        payload.interest_amount_cents,
    );
    let payment = state.engine.create_loan_payment(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_payment(payment))))
}

pub async fn update_payment(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<LoanPaymentUpdate>,
) -> Result<Json<LoanPaymentView>, ServerError> {
    let cmd = engine::UpdateLoanPaymentCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.date,
        payload.principal_amount_cents,
        payload.interest_amount_cents,
    );
    let payment = state.engine.update_loan_payment(cmd).await?;
    Ok(Json(map_payment(payment)))
}

pub async fn remove_payment(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_loan_payment(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
