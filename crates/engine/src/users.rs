//! Users table.
//!
//! Users authenticate at the HTTP layer; the engine only resolves them from
//! audit API calls. Rows are kept forever (no soft delete), and the password
//! column never reaches the audit ledger.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub household_uuid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "users";
    const PARANOID: bool = false;

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("email", self.email.audit_value()),
            ("first_name", self.first_name.audit_value()),
            ("household_uuid", self.household_uuid.audit_value()),
            ("last_name", self.last_name.audit_value()),
        ]
    }
}
