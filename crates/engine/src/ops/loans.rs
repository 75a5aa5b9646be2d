//! Loan and loan payment operations.
//!
//! A loan's balance starts at its amount and is reduced by payment
//! principal. Like fund balances, all balance arithmetic goes through one
//! routine, [`Engine::apply_loan_delta`].

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateLoanCmd, CreateLoanPaymentCmd, EngineError, ResultEngine, UpdateLoanCmd,
    UpdateLoanPaymentCmd, loan_payments, loans,
    util::{normalize_required_name, require_field, validate_amount},
};

use super::{Engine, with_tx};

impl Engine {
    /// Apply a signed delta to a loan's balance, recording the change.
    pub(super) async fn apply_loan_delta(
        &self,
        db_tx: &DatabaseTransaction,
        changes: &mut ChangeSet,
        loan_uuid: &str,
        delta_cents: i64,
    ) -> ResultEngine<()> {
        if delta_cents == 0 {
            return Ok(());
        }

        let before = loans::Entity::find_by_id(loan_uuid.to_string())
            .filter(loans::Column::DeletedAt.is_null())
            .one(db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("Loan not found".to_string()))?;

        let mut after = before.clone();
        after.balance_cents = before.balance_cents + delta_cents;
        after.updated_at = Utc::now();
        changes.track_update(&before, &after);

        let model = loans::ActiveModel {
            uuid: ActiveValue::Set(after.uuid.clone()),
            balance_cents: ActiveValue::Set(after.balance_cents),
            updated_at: ActiveValue::Set(after.updated_at),
            ..Default::default()
        };
        model.update(db_tx).await?;
        Ok(())
    }

    pub async fn create_loan(&self, cmd: CreateLoanCmd) -> ResultEngine<loans::Model> {
        let name = normalize_required_name(&cmd.name, "Name is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;

        let now = Utc::now();
        let loan = loans::Model {
            uuid: Uuid::new_v4().to_string(),
            household_uuid: user.household_uuid,
            name,
            amount_cents: cmd.amount_cents,
            balance_cents: cmd.amount_cents,
            archived_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = loans::ActiveModel {
                uuid: ActiveValue::Set(loan.uuid.clone()),
                household_uuid: ActiveValue::Set(loan.household_uuid.clone()),
                name: ActiveValue::Set(loan.name.clone()),
                amount_cents: ActiveValue::Set(loan.amount_cents),
                balance_cents: ActiveValue::Set(loan.balance_cents),
                archived_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(loan.created_at),
                updated_at: ActiveValue::Set(loan.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&loan);
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(loan)
        })
    }

    /// Update a loan's name and amount. An amount change shifts the
    /// remaining balance by the same delta, so the paid-off portion is
    /// preserved.
    pub async fn update_loan(&self, cmd: UpdateLoanCmd) -> ResultEngine<loans::Model> {
        require_field(&cmd.loan_uuid, "Loan is required")?;
        let name = normalize_required_name(&cmd.name, "Name is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_loan_in_household(&self.database, &user.household_uuid, &cmd.loan_uuid)
            .await?;

        let mut after = before.clone();
        after.name = name;
        after.amount_cents = cmd.amount_cents;
        after.balance_cents = before.balance_cents + (cmd.amount_cents - before.amount_cents);

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            let model = loans::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                name: ActiveValue::Set(after.name.clone()),
                amount_cents: ActiveValue::Set(after.amount_cents),
                balance_cents: ActiveValue::Set(after.balance_cents),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    /// Mark a loan archived. Archiving an archived loan is a no-op.
    pub async fn archive_loan(
        &self,
        audit_api_call_uuid: &str,
        loan_uuid: &str,
    ) -> ResultEngine<loans::Model> {
        require_field(loan_uuid, "Loan is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_loan_in_household(&self.database, &user.household_uuid, loan_uuid)
            .await?;
        if before.archived_at.is_some() {
            return Ok(before);
        }

        let mut after = before.clone();
        after.archived_at = Some(Utc::now());
        after.updated_at = Utc::now();

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);

        with_tx!(self, |db_tx| {
            let model = loans::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                archived_at: ActiveValue::Set(after.archived_at),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    pub async fn delete_loan(
        &self,
        audit_api_call_uuid: &str,
        loan_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(loan_uuid, "Loan is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_loan_in_household(&self.database, &user.household_uuid, loan_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }

    /// Create a loan payment; the principal reduces the loan balance.
    pub async fn create_loan_payment(
        &self,
        cmd: CreateLoanPaymentCmd,
    ) -> ResultEngine<loan_payments::Model> {
        require_field(&cmd.loan_uuid, "Loan is required")?;
        validate_amount(cmd.principal_amount_cents, "Invalid principal amount")?;
        validate_amount(cmd.interest_amount_cents, "Invalid interest amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let loan = self
            .require_loan_in_household(&self.database, &user.household_uuid, &cmd.loan_uuid)
            .await?;

        let now = Utc::now();
        let payment = loan_payments::Model {
            uuid: Uuid::new_v4().to_string(),
            loan_uuid: loan.uuid,
            date: cmd.date,
            principal_amount_cents: cmd.principal_amount_cents,
            interest_amount_cents: cmd.interest_amount_cents,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = loan_payments::ActiveModel {
                uuid: ActiveValue::Set(payment.uuid.clone()),
                loan_uuid: ActiveValue::Set(payment.loan_uuid.clone()),
                date: ActiveValue::Set(payment.date),
                principal_amount_cents: ActiveValue::Set(payment.principal_amount_cents),
                interest_amount_cents: ActiveValue::Set(payment.interest_amount_cents),
                created_at: ActiveValue::Set(payment.created_at),
                updated_at: ActiveValue::Set(payment.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&payment);
            self.apply_loan_delta(
                &db_tx,
                &mut changes,
                &payment.loan_uuid,
                -payment.principal_amount_cents,
            )
            .await?;
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(payment)
        })
    }

    /// Update a loan payment. The payment stays on its loan; a principal
    /// change applies the difference to the loan balance.
    pub async fn update_loan_payment(
        &self,
        cmd: UpdateLoanPaymentCmd,
    ) -> ResultEngine<loan_payments::Model> {
        require_field(&cmd.loan_payment_uuid, "Loan payment is required")?;
        validate_amount(cmd.principal_amount_cents, "Invalid principal amount")?;
        validate_amount(cmd.interest_amount_cents, "Invalid interest amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_loan_payment_in_household(
                &self.database,
                &user.household_uuid,
                &cmd.loan_payment_uuid,
            )
            .await?;

        let mut after = before.clone();
        after.date = cmd.date;
        after.principal_amount_cents = cmd.principal_amount_cents;
        after.interest_amount_cents = cmd.interest_amount_cents;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            self.apply_loan_delta(
                &db_tx,
                &mut changes,
                &after.loan_uuid,
                before.principal_amount_cents - after.principal_amount_cents,
            )
            .await?;

            let model = loan_payments::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                date: ActiveValue::Set(after.date),
                principal_amount_cents: ActiveValue::Set(after.principal_amount_cents),
                interest_amount_cents: ActiveValue::Set(after.interest_amount_cents),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    /// Soft-delete a loan payment, restoring its principal to the balance.
    pub async fn delete_loan_payment(
        &self,
        audit_api_call_uuid: &str,
        loan_payment_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(loan_payment_uuid, "Loan payment is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_loan_payment_in_household(
                &self.database,
                &user.household_uuid,
                loan_payment_uuid,
            )
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.apply_loan_delta(
                &db_tx,
                &mut changes,
                &before.loan_uuid,
                before.principal_amount_cents,
            )
            .await?;
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }
}
