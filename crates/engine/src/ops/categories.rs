//! Category and subcategory operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, ResultEngine, categories, subcategories,
    util::{normalize_required_name, require_field},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_category(
        &self,
        audit_api_call_uuid: &str,
        name: &str,
    ) -> ResultEngine<categories::Model> {
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;

        let now = Utc::now();
        let category = categories::Model {
            uuid: Uuid::new_v4().to_string(),
            household_uuid: user.household_uuid,
            name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = categories::ActiveModel {
                uuid: ActiveValue::Set(category.uuid.clone()),
                household_uuid: ActiveValue::Set(category.household_uuid.clone()),
                name: ActiveValue::Set(category.name.clone()),
                created_at: ActiveValue::Set(category.created_at),
                updated_at: ActiveValue::Set(category.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&category);
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(category)
        })
    }

    pub async fn update_category(
        &self,
        audit_api_call_uuid: &str,
        category_uuid: &str,
        name: &str,
    ) -> ResultEngine<categories::Model> {
        require_field(category_uuid, "Category is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_category_in_household(&self.database, &user.household_uuid, category_uuid)
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
            let model = categories::ActiveModel {
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

    pub async fn delete_category(
        &self,
        audit_api_call_uuid: &str,
        category_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(category_uuid, "Category is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_category_in_household(&self.database, &user.household_uuid, category_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }

    pub async fn create_subcategory(
        &self,
        audit_api_call_uuid: &str,
        category_uuid: &str,
        name: &str,
    ) -> ResultEngine<subcategories::Model> {
        require_field(category_uuid, "Category is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let category = self
            .require_category_in_household(&self.database, &user.household_uuid, category_uuid)
            .await?;

        let now = Utc::now();
        let subcategory = subcategories::Model {
            uuid: Uuid::new_v4().to_string(),
            category_uuid: category.uuid,
            name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = subcategories::ActiveModel {
                uuid: ActiveValue::Set(subcategory.uuid.clone()),
                category_uuid: ActiveValue::Set(subcategory.category_uuid.clone()),
                name: ActiveValue::Set(subcategory.name.clone()),
                created_at: ActiveValue::Set(subcategory.created_at),
                updated_at: ActiveValue::Set(subcategory.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&subcategory);
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(subcategory)
        })
    }

    /// Update a subcategory, possibly moving it under another category of
    /// the same household.
    pub async fn update_subcategory(
        &self,
        audit_api_call_uuid: &str,
        subcategory_uuid: &str,
        category_uuid: &str,
        name: &str,
    ) -> ResultEngine<subcategories::Model> {
        require_field(subcategory_uuid, "Subcategory is required")?;
        require_field(category_uuid, "Category is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_subcategory_in_household(
                &self.database,
                &user.household_uuid,
                subcategory_uuid,
            )
            .await?;
        let category = self
            .require_category_in_household(&self.database, &user.household_uuid, category_uuid)
            .await?;

        let mut after = before.clone();
        after.category_uuid = category.uuid;
        after.name = name;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            let model = subcategories::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                category_uuid: ActiveValue::Set(after.category_uuid.clone()),
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

    pub async fn delete_subcategory(
        &self,
        audit_api_call_uuid: &str,
        subcategory_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(subcategory_uuid, "Subcategory is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_subcategory_in_household(
                &self.database,
                &user.household_uuid,
                subcategory_uuid,
            )
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
