//! Loan payments table.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "loan_payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub loan_uuid: String,
    pub date: Date,
    pub principal_amount_cents: i64,
    pub interest_amount_cents: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::loans::Entity",
        from = "Column::LoanUuid",
        to = "super::loans::Column::Uuid"
    )]
    Loans,
}

impl Related<super::loans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "loan_payments";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("date", self.date.audit_value()),
            (
                "interest_amount_cents",
                self.interest_amount_cents.audit_value(),
            ),
            ("loan_uuid", self.loan_uuid.audit_value()),
            (
                "principal_amount_cents",
                self.principal_amount_cents.audit_value(),
            ),
        ]
    }
}
