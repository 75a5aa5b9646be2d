//! Audit API calls table: one row per inbound HTTP request.
//!
//! Rows are created by the request layer before controller logic runs; the
//! engine only reads them to resolve the acting user.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_api_calls")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub http_method: String,
    pub route: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub user_uuid: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
