//! Income operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateIncomeCmd, ResultEngine, UpdateIncomeCmd, incomes,
    util::{require_field, validate_amount},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_income(&self, cmd: CreateIncomeCmd) -> ResultEngine<incomes::Model> {
        require_field(&cmd.household_member_uuid, "Household member is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let member = self
            .require_household_member_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.household_member_uuid,
            )
            .await?;
        let employer_uuid = match &cmd.employer_uuid {
            Some(employer_uuid) => Some(
                self.require_employer_in_household(
                    &self.database,
                    &user.household_uuid,
                    employer_uuid,
                )
                .await?
                .uuid,
            ),
            None => None,
        };

        let now = Utc::now();
        let income = incomes::Model {
            uuid: Uuid::new_v4().to_string(),
            household_member_uuid: member.uuid,
            employer_uuid,
            date: cmd.date,
            amount_cents: cmd.amount_cents,
            description: cmd.description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = incomes::ActiveModel {
                uuid: ActiveValue::Set(income.uuid.clone()),
                household_member_uuid: ActiveValue::Set(income.household_member_uuid.clone()),
                employer_uuid: ActiveValue::Set(income.employer_uuid.clone()),
                date: ActiveValue::Set(income.date),
                amount_cents: ActiveValue::Set(income.amount_cents),
                description: ActiveValue::Set(income.description.clone()),
                created_at: ActiveValue::Set(income.created_at),
                updated_at: ActiveValue::Set(income.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&income);
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(income)
        })
    }

    pub async fn update_income(&self, cmd: UpdateIncomeCmd) -> ResultEngine<incomes::Model> {
        require_field(&cmd.income_uuid, "Income is required")?;
        require_field(&cmd.household_member_uuid, "Household member is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_income_in_household(&self.database, &user.household_uuid, &cmd.income_uuid)
            .await?;
        let member = self
            .require_household_member_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.household_member_uuid,
            )
            .await?;
        let employer_uuid = match &cmd.employer_uuid {
            Some(employer_uuid) => Some(
                self.require_employer_in_household(
                    &self.database,
                    &user.household_uuid,
                    employer_uuid,
                )
                .await?
                .uuid,
            ),
            None => None,
        };

        let mut after = before.clone();
        after.household_member_uuid = member.uuid;
        after.employer_uuid = employer_uuid;
        after.date = cmd.date;
        after.amount_cents = cmd.amount_cents;
        after.description = cmd.description;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            let model = incomes::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                household_member_uuid: ActiveValue::Set(after.household_member_uuid.clone()),
                employer_uuid: ActiveValue::Set(after.employer_uuid.clone()),
                date: ActiveValue::Set(after.date),
                amount_cents: ActiveValue::Set(after.amount_cents),
                description: ActiveValue::Set(after.description.clone()),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    pub async fn delete_income(
        &self,
        audit_api_call_uuid: &str,
        income_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(income_uuid, "Income is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_income_in_household(&self.database, &user.household_uuid, income_uuid)
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
