//! Vendor operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, ResultEngine, vendors,
    util::{normalize_required_name, require_field},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_vendor(
        &self,
        audit_api_call_uuid: &str,
        name: &str,
    ) -> ResultEngine<vendors::Model> {
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;

        let now = Utc::now();
        let vendor = vendors::Model {
            uuid: Uuid::new_v4().to_string(),
            household_uuid: user.household_uuid,
            name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = vendors::ActiveModel {
                uuid: ActiveValue::Set(vendor.uuid.clone()),
                household_uuid: ActiveValue::Set(vendor.household_uuid.clone()),
                name: ActiveValue::Set(vendor.name.clone()),
                created_at: ActiveValue::Set(vendor.created_at),
                updated_at: ActiveValue::Set(vendor.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&vendor);
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(vendor)
        })
    }

    pub async fn update_vendor(
        &self,
        audit_api_call_uuid: &str,
        vendor_uuid: &str,
        name: &str,
    ) -> ResultEngine<vendors::Model> {
        require_field(vendor_uuid, "Vendor is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_vendor_in_household(&self.database, &user.household_uuid, vendor_uuid)
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
            let model = vendors::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                name: ActiveValue::Set(after.name.clone()),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    pub async fn delete_vendor(
        &self,
        audit_api_call_uuid: &str,
        vendor_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(vendor_uuid, "Vendor is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_vendor_in_household(&self.database, &user.household_uuid, vendor_uuid)
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
