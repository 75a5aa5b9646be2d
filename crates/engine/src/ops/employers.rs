//! Employer operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, ResultEngine, employers,
    util::{normalize_required_name, require_field},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_employer(
        &self,
        audit_api_call_uuid: &str,
        name: &str,
    ) -> ResultEngine<employers::Model> {
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;

        let now = Utc::now();
        let employer = employers::Model {
            uuid: Uuid::new_v4().to_string(),
            household_uuid: user.household_uuid,
            name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = employers::ActiveModel {
                uuid: ActiveValue::Set(employer.uuid.clone()),
                household_uuid: ActiveValue::Set(employer.household_uuid.clone()),
                name: ActiveValue::Set(employer.name.clone()),
                created_at: ActiveValue::Set(employer.created_at),
                updated_at: ActiveValue::Set(employer.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&employer);
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(employer)
        })
    }

    pub async fn update_employer(
        &self,
        audit_api_call_uuid: &str,
        employer_uuid: &str,
        name: &str,
    ) -> ResultEngine<employers::Model> {
        require_field(employer_uuid, "Employer is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_employer_in_household(&self.database, &user.household_uuid, employer_uuid)
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
            let model = employers::ActiveModel {
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

    pub async fn delete_employer(
        &self,
        audit_api_call_uuid: &str,
        employer_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(employer_uuid, "Employer is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_employer_in_household(&self.database, &user.household_uuid, employer_uuid)
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
