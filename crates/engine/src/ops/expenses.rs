//! Expense operations.
//!
//! Expenses may draw from a fund; the linked fund's balance is adjusted
//! through `apply_fund_delta` in the same transaction as the expense row.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateExpenseCmd, ResultEngine, UpdateExpenseCmd, expenses,
    util::{require_field, validate_amount},
};

use super::{Engine, with_tx};

impl Engine {
    pub async fn create_expense(&self, cmd: CreateExpenseCmd) -> ResultEngine<expenses::Model> {
        require_field(&cmd.subcategory_uuid, "Category is required")?;
        require_field(&cmd.vendor_uuid, "Vendor is required")?;
        require_field(&cmd.household_member_uuid, "Household member is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;
        validate_amount(cmd.reimbursed_cents, "Invalid reimbursed amount")?;

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
        let vendor = self
            .require_vendor_in_household(&self.database, &user.household_uuid, &cmd.vendor_uuid)
            .await?;
        let member = self
            .require_household_member_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.household_member_uuid,
            )
            .await?;
        let fund_uuid = match &cmd.fund_uuid {
            Some(fund_uuid) => Some(
                self.require_fund_in_household(&self.database, &user.household_uuid, fund_uuid)
                    .await?
                    .uuid,
            ),
            None => None,
        };

        let now = Utc::now();
        let expense = expenses::Model {
            uuid: Uuid::new_v4().to_string(),
            subcategory_uuid: subcategory.uuid,
            vendor_uuid: vendor.uuid,
            household_member_uuid: member.uuid,
            fund_uuid,
            date: cmd.date,
            amount_cents: cmd.amount_cents,
            reimbursed_cents: cmd.reimbursed_cents,
            description: cmd.description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = expenses::ActiveModel {
                uuid: ActiveValue::Set(expense.uuid.clone()),
                subcategory_uuid: ActiveValue::Set(expense.subcategory_uuid.clone()),
                vendor_uuid: ActiveValue::Set(expense.vendor_uuid.clone()),
                household_member_uuid: ActiveValue::Set(expense.household_member_uuid.clone()),
                fund_uuid: ActiveValue::Set(expense.fund_uuid.clone()),
                date: ActiveValue::Set(expense.date),
                amount_cents: ActiveValue::Set(expense.amount_cents),
                reimbursed_cents: ActiveValue::Set(expense.reimbursed_cents),
                description: ActiveValue::Set(expense.description.clone()),
                created_at: ActiveValue::Set(expense.created_at),
                updated_at: ActiveValue::Set(expense.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&expense);
            if let Some(fund_uuid) = &expense.fund_uuid {
                self.apply_fund_delta(&db_tx, &mut changes, fund_uuid, -expense.amount_cents)
                    .await?;
            }
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(expense)
        })
    }

    /// Update an expense. Fund linkage changes restore the old fund's
    /// balance and charge the new one.
    pub async fn update_expense(&self, cmd: UpdateExpenseCmd) -> ResultEngine<expenses::Model> {
        require_field(&cmd.expense_uuid, "Expense is required")?;
        require_field(&cmd.subcategory_uuid, "Category is required")?;
        require_field(&cmd.vendor_uuid, "Vendor is required")?;
        require_field(&cmd.household_member_uuid, "Household member is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;
        validate_amount(cmd.reimbursed_cents, "Invalid reimbursed amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_expense_in_household(&self.database, &user.household_uuid, &cmd.expense_uuid)
            .await?;
        let subcategory = self
            .require_subcategory_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.subcategory_uuid,
            )
            .await?;
        let vendor = self
            .require_vendor_in_household(&self.database, &user.household_uuid, &cmd.vendor_uuid)
            .await?;
        let member = self
            .require_household_member_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.household_member_uuid,
            )
            .await?;
        let fund_uuid = match &cmd.fund_uuid {
            Some(fund_uuid) => Some(
                self.require_fund_in_household(&self.database, &user.household_uuid, fund_uuid)
                    .await?
                    .uuid,
            ),
            None => None,
        };

        let mut after = before.clone();
        after.subcategory_uuid = subcategory.uuid;
        after.vendor_uuid = vendor.uuid;
        after.household_member_uuid = member.uuid;
        after.fund_uuid = fund_uuid;
        after.date = cmd.date;
        after.amount_cents = cmd.amount_cents;
        after.reimbursed_cents = cmd.reimbursed_cents;
        after.description = cmd.description;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            if before.fund_uuid == after.fund_uuid {
                if let Some(fund_uuid) = &after.fund_uuid {
                    self.apply_fund_delta(
                        &db_tx,
                        &mut changes,
                        fund_uuid,
                        before.amount_cents - after.amount_cents,
                    )
                    .await?;
                }
            } else {
                if let Some(fund_uuid) = &before.fund_uuid {
                    self.apply_fund_delta(&db_tx, &mut changes, fund_uuid, before.amount_cents)
                        .await?;
                }
                if let Some(fund_uuid) = &after.fund_uuid {
                    self.apply_fund_delta(&db_tx, &mut changes, fund_uuid, -after.amount_cents)
                        .await?;
                }
            }

            let model = expenses::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                subcategory_uuid: ActiveValue::Set(after.subcategory_uuid.clone()),
                vendor_uuid: ActiveValue::Set(after.vendor_uuid.clone()),
                household_member_uuid: ActiveValue::Set(after.household_member_uuid.clone()),
                fund_uuid: ActiveValue::Set(after.fund_uuid.clone()),
                date: ActiveValue::Set(after.date),
                amount_cents: ActiveValue::Set(after.amount_cents),
                reimbursed_cents: ActiveValue::Set(after.reimbursed_cents),
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

    /// Soft-delete an expense, restoring any linked fund balance.
    pub async fn delete_expense(
        &self,
        audit_api_call_uuid: &str,
        expense_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(expense_uuid, "Expense is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_expense_in_household(&self.database, &user.household_uuid, expense_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            if let Some(fund_uuid) = &before.fund_uuid {
                self.apply_fund_delta(&db_tx, &mut changes, fund_uuid, before.amount_cents)
                    .await?;
            }
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }
}
