//! Attachment operations.
//!
//! Attachments are metadata rows pointing at an owned expense; the payload
//! upload happens in the storage layer, which fills the `aws_*` columns.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateAttachmentCmd, ResultEngine, UpdateAttachmentCmd, attachments,
    util::{normalize_required_name, require_field},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_attachment(
        &self,
        cmd: CreateAttachmentCmd,
    ) -> ResultEngine<attachments::Model> {
        require_field(&cmd.expense_uuid, "Expense is required")?;
        let name = normalize_required_name(&cmd.name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let expense = self
            .require_expense_in_household(&self.database, &user.household_uuid, &cmd.expense_uuid)
            .await?;

        let now = Utc::now();
        let attachment = attachments::Model {
            uuid: Uuid::new_v4().to_string(),
            entity_type: "expense".to_string(),
            entity_uuid: expense.uuid,
            name,
            aws_bucket: None,
            aws_key: None,
            aws_content_type: None,
            aws_content_length: None,
            aws_etag: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = attachments::ActiveModel {
                uuid: ActiveValue::Set(attachment.uuid.clone()),
                entity_type: ActiveValue::Set(attachment.entity_type.clone()),
                entity_uuid: ActiveValue::Set(attachment.entity_uuid.clone()),
                name: ActiveValue::Set(attachment.name.clone()),
                aws_bucket: ActiveValue::Set(None),
                aws_key: ActiveValue::Set(None),
                aws_content_type: ActiveValue::Set(None),
                aws_content_length: ActiveValue::Set(None),
                aws_etag: ActiveValue::Set(None),
                created_at: ActiveValue::Set(attachment.created_at),
                updated_at: ActiveValue::Set(attachment.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&attachment);
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(attachment)
        })
    }

    pub async fn update_attachment(
        &self,
        cmd: UpdateAttachmentCmd,
    ) -> ResultEngine<attachments::Model> {
        require_field(&cmd.attachment_uuid, "Attachment is required")?;
        let name = normalize_required_name(&cmd.name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_attachment_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.attachment_uuid,
            )
            .await?;

        let mut after = before.clone();
        after.name = name;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            let model = attachments::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                name: ActiveValue::Set(after.name.clone()),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    pub async fn delete_attachment(
        &self,
        audit_api_call_uuid: &str,
        attachment_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(attachment_uuid, "Attachment is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_attachment_in_household(&self.database, &user.household_uuid, attachment_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }
}
