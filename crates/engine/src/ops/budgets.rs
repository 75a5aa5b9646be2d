//! Budget operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateBudgetCmd, EngineError, ResultEngine, UpdateBudgetCmd, budgets,
    util::{require_field, validate_amount, validate_month, validate_year},
};

use super::{Engine, with_tx};

impl Engine {
    /// Create a budget for a `(month, year, subcategory)` tuple.
    pub async fn create_budget(&self, cmd: CreateBudgetCmd) -> ResultEngine<budgets::Model> {
        require_field(&cmd.subcategory_uuid, "Category is required")?;
        validate_year(cmd.year)?;
        validate_month(cmd.month)?;
        validate_amount(cmd.amount_cents, "Invalid budget")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let subcategory = self
            .require_subcategory_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.subcategory_uuid,
            )
            .await?;

        self.require_no_duplicate_budget(&subcategory.uuid, cmd.month, cmd.year, None)
            .await?;

        let now = Utc::now();
        let budget = budgets::Model {
            uuid: Uuid::new_v4().to_string(),
            subcategory_uuid: subcategory.uuid,
            month: cmd.month,
            year: cmd.year,
            amount_cents: cmd.amount_cents,
            notes: cmd.notes,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = budgets::ActiveModel {
                uuid: ActiveValue::Set(budget.uuid.clone()),
                subcategory_uuid: ActiveValue::Set(budget.subcategory_uuid.clone()),
                month: ActiveValue::Set(budget.month),
                year: ActiveValue::Set(budget.year),
                amount_cents: ActiveValue::Set(budget.amount_cents),
                notes: ActiveValue::Set(budget.notes.clone()),
                created_at: ActiveValue::Set(budget.created_at),
                updated_at: ActiveValue::Set(budget.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&budget);
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(budget)
        })
    }

    /// Update a budget. A no-op update opens no transaction and records no
    /// audit entries.
    pub async fn update_budget(&self, cmd: UpdateBudgetCmd) -> ResultEngine<budgets::Model> {
        require_field(&cmd.budget_uuid, "Budget is required")?;
        require_field(&cmd.subcategory_uuid, "Category is required")?;
        validate_year(cmd.year)?;
        validate_month(cmd.month)?;
        validate_amount(cmd.amount_cents, "Invalid budget")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_budget_in_household(&self.database, &user.household_uuid, &cmd.budget_uuid)
            .await?;
        let subcategory = self
            .require_subcategory_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.subcategory_uuid,
            )
            .await?;

        let mut after = before.clone();
        after.subcategory_uuid = subcategory.uuid;
        after.month = cmd.month;
        after.year = cmd.year;
        after.amount_cents = cmd.amount_cents;
        after.notes = cmd.notes;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        self.require_no_duplicate_budget(
            &after.subcategory_uuid,
            after.month,
            after.year,
            Some(&before.uuid),
        )
        .await?;

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            let model = budgets::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                subcategory_uuid: ActiveValue::Set(after.subcategory_uuid.clone()),
                month: ActiveValue::Set(after.month),
                year: ActiveValue::Set(after.year),
                amount_cents: ActiveValue::Set(after.amount_cents),
                notes: ActiveValue::Set(after.notes.clone()),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    /// Soft-delete a budget.
    pub async fn delete_budget(
        &self,
        audit_api_call_uuid: &str,
        budget_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(budget_uuid, "Budget is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_budget_in_household(&self.database, &user.household_uuid, budget_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }

    async fn require_no_duplicate_budget(
        &self,
        subcategory_uuid: &str,
        month: i32,
        year: i32,
        exclude_uuid: Option<&str>,
    ) -> ResultEngine<()> {
        let mut query = budgets::Entity::find()
            .filter(budgets::Column::SubcategoryUuid.eq(subcategory_uuid.to_string()))
            .filter(budgets::Column::Month.eq(month))
            .filter(budgets::Column::Year.eq(year))
            .filter(budgets::Column::DeletedAt.is_null());
        if let Some(uuid) = exclude_uuid {
            query = query.filter(budgets::Column::Uuid.ne(uuid.to_string()));
        }
        if query.one(&self.database).await?.is_some() {
            return Err(EngineError::Conflict("Duplicate budget".to_string()));
        }
        Ok(())
    }
}
