//! Budgets table.
//!
//! At most one budget exists per `(month, year, subcategory)`; the
//! controller enforces this with a lookup before the mutation.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub subcategory_uuid: String,
    pub month: i32,
    pub year: i32,
    pub amount_cents: i64,
    pub notes: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subcategories::Entity",
        from = "Column::SubcategoryUuid",
        to = "super::subcategories::Column::Uuid"
    )]
    Subcategories,
}

impl Related<super::subcategories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subcategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "budgets";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("amount_cents", self.amount_cents.audit_value()),
            ("month", self.month.audit_value()),
            ("notes", self.notes.audit_value()),
            ("subcategory_uuid", self.subcategory_uuid.audit_value()),
            ("year", self.year.audit_value()),
        ]
    }
}
