//! Subcategories table.
//!
//! Subcategories reach their household through the parent category.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subcategories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub category_uuid: String,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryUuid",
        to = "super::categories::Column::Uuid"
    )]
    Categories,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "subcategories";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("category_uuid", self.category_uuid.audit_value()),
            ("name", self.name.audit_value()),
        ]
    }
}
