//! Attachments table.
//!
//! Only the metadata lives here; the payload sits in blob storage addressed
//! by the `aws_*` columns, which are filled in by the storage layer after
//! upload.

use sea_orm::entity::prelude::*;

use crate::audit::{AuditValue, Audited};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attachments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub entity_type: String,
    pub entity_uuid: String,
    pub name: String,
    pub aws_bucket: Option<String>,
    pub aws_key: Option<String>,
    pub aws_content_type: Option<String>,
    pub aws_content_length: Option<i64>,
    pub aws_etag: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Model {
    const TABLE: &'static str = "attachments";

    fn key(&self) -> String {
        self.uuid.clone()
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }

    fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("aws_bucket", self.aws_bucket.audit_value()),
            ("aws_content_length", self.aws_content_length.audit_value()),
            ("aws_content_type", self.aws_content_type.audit_value()),
            ("aws_etag", self.aws_etag.audit_value()),
            ("aws_key", self.aws_key.audit_value()),
            ("entity_type", self.entity_type.audit_value()),
            ("entity_uuid", self.entity_uuid.audit_value()),
            ("name", self.name.audit_value()),
        ]
    }
}
