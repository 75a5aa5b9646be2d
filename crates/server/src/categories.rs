//! Categories and subcategories API endpoints.

use api_types::category::{
    CategoryCreate, CategoryUpdate, CategoryView, SubcategoryCreate, SubcategoryUpdate,
    SubcategoryView,
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

fn map_category(category: engine::categories::Model) -> CategoryView {
    CategoryView {
        uuid: category.uuid,
        name: category.name,
        created_at: category.created_at,
    }
}

fn map_subcategory(subcategory: engine::subcategories::Model) -> SubcategoryView {
    SubcategoryView {
        uuid: subcategory.uuid,
        category_uuid: subcategory.category_uuid,
        name: subcategory.name,
        created_at: subcategory.created_at,
    }
}

pub async fn create(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .engine
        .create_category(&ctx.audit_api_call_uuid, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn update(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<CategoryView>, ServerError> {
    let category = state
        .engine
        .update_category(&ctx.audit_api_call_uuid, &uuid, &payload.name)
        .await?;
    Ok(Json(map_category(category)))
}

pub async fn remove(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_category(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_subcategory(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Json(payload): Json<SubcategoryCreate>,
) -> Result<(StatusCode, Json<SubcategoryView>), ServerError> {
    let subcategory = state
        .engine
        .create_subcategory(
            &ctx.audit_api_call_uuid,
            &payload.category_uuid,
            &payload.name,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(map_subcategory(subcategory))))
}

pub async fn update_subcategory(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
    Json(payload): Json<SubcategoryUpdate>,
) -> Result<Json<SubcategoryView>, ServerError> {
    let subcategory = state
        .engine
        .update_subcategory(
            &ctx.audit_api_call_uuid,
            &uuid,
            &payload.category_uuid,
            &payload.name,
        )
        .await?;
    Ok(Json(map_subcategory(subcategory)))
}

pub async fn remove_subcategory(
    Extension(ctx): Extension<AuditContext>,
    State(state): State<ServerState>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ServerError> {
    state
        .engine
        .delete_subcategory(&ctx.audit_api_call_uuid, &uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
