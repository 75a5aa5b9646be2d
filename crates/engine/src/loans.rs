//! Loans table.
//!
//! `balance_cents` starts at `amount_cents` and is reduced by payment
//! principal; like fund balances it is maintained by the controller inside
//! the payment's transaction.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub household_uuid: String,
    pub name: String,
    pub amount_cents: i64,
    pub balance_cents: i64,
    pub archived_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::loan_payments::Entity")]
    LoanPayments,
}

impl Related<super::loan_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LoanPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "loans";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("amount_cents", self.amount_cents.audit_value()),
            ("archived_at", self.archived_at.audit_value()),
            ("balance_cents", self.balance_cents.audit_value()),
            ("household_uuid", self.household_uuid.audit_value()),
            ("name", self.name.audit_value()),
        ]
    }
}
