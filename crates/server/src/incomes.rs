//! Incomes API endpoints.

use api_types::income::{IncomeCreate, IncomeUpdate, IncomeView};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    server::{AuditContext, ServerState},
};

fn map_income(income: engine::incomes::Model) -> IncomeView {
    IncomeView {
        uuid: income.uuid,
        household_member_uuid: income.household_member_uuid,
        employer_uuid: income.employer_uuid,
        date: income.date,
        amount_cents: income.amount_cents,
        description: income.description,
        created_at: income.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<IncomeCreate>,
) -> Result<(StatusCode, Json<IncomeView>), ServerError> {
    let mut cmd = engine::CreateIncomeCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        payload.household_member_uuid,
        payload.date,
        payload.amount_cents,
        payload.description,
    );
    if let Some(employer_uuid) = payload.employer_uuid {
        cmd = cmd.employer_uuid(employer_uuid);
    }
    let income = state.engine.create_income(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_income(income))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<IncomeUpdate>,
) -> Result<Json<IncomeView>, ServerError> {
    let mut cmd = engine::UpdateIncomeCmd::new(
        ctx.audit_api_call_uuid.as_str(),
        uuid,
        payload.household_member_uuid,
        payload.date,
        payload.amount_cents,
        payload.description,
    );
    if let Some(employer_uuid) = payload.employer_uuid {
        cmd = cmd.employer_uuid(employer_uuid);
    }
    let income = state.engine.update_income(cmd).await?;
    Ok(Json(map_income(income)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_income(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
