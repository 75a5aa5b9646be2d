//! Deposits table.
//!
//! A deposit contributes its full amount to the referenced fund's balance.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deposits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub fund_uuid: String,
    pub date: Date,
    pub amount_cents: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::funds::Entity",
        from = "Column::FundUuid",
        to = "super::funds::Column::Uuid"
    )]
    Funds,
}

impl Related<super::funds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "deposits";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("amount_cents", self.amount_cents.audit_value()),
            ("date", self.date.audit_value()),
            ("fund_uuid", self.fund_uuid.audit_value()),
        ]
    }
}
