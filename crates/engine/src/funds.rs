//! Funds table.
//!
//! `balance_cents` is a derived aggregate: it must equal the sum of the
//! fund's deposits minus its fund-linked expenses. Controllers maintain it
//! incrementally in the same transaction as the contributing row; there is
//! no database trigger.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "funds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub household_uuid: String,
    pub name: String,
    pub balance_cents: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::deposits::Entity")]
    Deposits,
}

impl Related<super::deposits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deposits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "funds";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("balance_cents", self.balance_cents.audit_value()),
            ("household_uuid", self.household_uuid.audit_value()),
            ("name", self.name.audit_value()),
        ]
    }
}
