//! Household operations.
//!
//! Households are created during signup, outside the engine; here they can
//! only be renamed by one of their own users.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{ChangeSet, ResultEngine, households, util::normalize_required_name};

use super::{Engine, with_tx};

impl Engine {
    pub async fn update_household(
        &self,
        audit_api_call_uuid: &str,
        name: &str,
    ) -> ResultEngine<households::Model> {
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_household(&self.database, &user.household_uuid)
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
            let model = households::ActiveModel {
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
}
