//! Expenses table.
//!
//! An expense with a fund reference draws that amount out of the fund
//! balance.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub subcategory_uuid: String,
    pub vendor_uuid: String,
    pub household_member_uuid: String,
    pub fund_uuid: Option<String>,
    pub date: Date,
    pub amount_cents: i64,
    pub reimbursed_cents: i64,
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::household_members::Entity",
        from = "Column::HouseholdMemberUuid",
        to = "super::household_members::Column::Uuid"
    )]
    HouseholdMembers,
}

impl Related<super::household_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HouseholdMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "expenses";

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
            ("description", self.description.audit_value()),
            ("fund_uuid", self.fund_uuid.audit_value()),
            (
                "household_member_uuid",
                self.household_member_uuid.audit_value(),
            ),
            ("reimbursed_cents", self.reimbursed_cents.audit_value()),
            ("subcategory_uuid", self.subcategory_uuid.audit_value()),
            ("vendor_uuid", self.vendor_uuid.audit_value()),
        ]
    }
}
