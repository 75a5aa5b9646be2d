//! Fund and deposit operations.
//!
//! Fund balances are derived: every deposit mutation applies its signed
//! delta to the owning fund inside the same transaction, through
//! [`Engine::apply_fund_delta`] — the single place fund balance arithmetic
//! happens (fund-linked expenses go through it too).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    ChangeSet, CreateDepositCmd, EngineError, ResultEngine, UpdateDepositCmd, deposits, funds,
    util::{normalize_required_name, require_field, validate_amount},
};

use super::{Engine, with_tx};

impl Engine {
    /// Apply a signed delta to a fund's balance, recording the change.
    ///
    /// The fund is read on the caller's transaction so the read and the
    /// write observe one snapshot.
    pub(super) async fn apply_fund_delta(
        &self,
        db_tx: &DatabaseTransaction,
        changes: &mut ChangeSet,
        fund_uuid: &str,
        delta_cents: i64,
    ) -> ResultEngine<()> {
        if delta_cents == 0 {
            return Ok(());
        }

        let before = funds::Entity::find_by_id(fund_uuid.to_string())
            .filter(funds::Column::DeletedAt.is_null())
            .one(db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound("Fund not found".to_string()))?;

        let mut after = before.clone();
        after.balance_cents = before.balance_cents + delta_cents;
        after.updated_at = Utc::now();
        changes.track_update(&before, &after);

        let model = funds::ActiveModel {
            uuid: ActiveValue::Set(after.uuid.clone()),
            balance_cents: ActiveValue::Set(after.balance_cents),
            updated_at: ActiveValue::Set(after.updated_at),
            ..Default::default()
        };
        model.update(db_tx).await?;
        Ok(())
    }

    /// Create a fund. Balances always start at zero; money arrives through
    /// deposits.
    pub async fn create_fund(
        &self,
        audit_api_call_uuid: &str,
        name: &str,
    ) -> ResultEngine<funds::Model> {
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;

        let now = Utc::now();
        let fund = funds::Model {
            uuid: Uuid::new_v4().to_string(),
            household_uuid: user.household_uuid,
            name,
            balance_cents: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = funds::ActiveModel {
                uuid: ActiveValue::Set(fund.uuid.clone()),
                household_uuid: ActiveValue::Set(fund.household_uuid.clone()),
                name: ActiveValue::Set(fund.name.clone()),
                balance_cents: ActiveValue::Set(fund.balance_cents),
                created_at: ActiveValue::Set(fund.created_at),
                updated_at: ActiveValue::Set(fund.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&fund);
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(fund)
        })
    }

    pub async fn update_fund(
        &self,
        audit_api_call_uuid: &str,
        fund_uuid: &str,
        name: &str,
    ) -> ResultEngine<funds::Model> {
        require_field(fund_uuid, "Fund is required")?;
        let name = normalize_required_name(name, "Name is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_fund_in_household(&self.database, &user.household_uuid, fund_uuid)
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
            let model = funds::ActiveModel {
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

    pub async fn delete_fund(
        &self,
        audit_api_call_uuid: &str,
        fund_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(fund_uuid, "Fund is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_fund_in_household(&self.database, &user.household_uuid, fund_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }

    /// Create a deposit and add its amount to the fund balance.
    pub async fn create_deposit(&self, cmd: CreateDepositCmd) -> ResultEngine<deposits::Model> {
        require_field(&cmd.fund_uuid, "Fund is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let fund = self
            .require_fund_in_household(&self.database, &user.household_uuid, &cmd.fund_uuid)
            .await?;

        let now = Utc::now();
        let deposit = deposits::Model {
            uuid: Uuid::new_v4().to_string(),
            fund_uuid: fund.uuid,
            date: cmd.date,
            amount_cents: cmd.amount_cents,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        with_tx!(self, |db_tx| {
            let model = deposits::ActiveModel {
                uuid: ActiveValue::Set(deposit.uuid.clone()),
                fund_uuid: ActiveValue::Set(deposit.fund_uuid.clone()),
                date: ActiveValue::Set(deposit.date),
                amount_cents: ActiveValue::Set(deposit.amount_cents),
                created_at: ActiveValue::Set(deposit.created_at),
                updated_at: ActiveValue::Set(deposit.updated_at),
                deleted_at: ActiveValue::Set(None),
            };
            model.insert(&db_tx).await?;

            let mut changes = ChangeSet::new();
            changes.track_new(&deposit);
            self.apply_fund_delta(&db_tx, &mut changes, &deposit.fund_uuid, deposit.amount_cents)
                .await?;
            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(deposit)
        })
    }

    /// Update a deposit.
    ///
    /// An amount change applies the difference to the fund; retargeting
    /// moves the full amount out of the old fund and into the new one. Both
    /// fund updates land in the same change set as the deposit row.
    pub async fn update_deposit(&self, cmd: UpdateDepositCmd) -> ResultEngine<deposits::Model> {
        require_field(&cmd.deposit_uuid, "Deposit is required")?;
        require_field(&cmd.fund_uuid, "Fund is required")?;
        validate_amount(cmd.amount_cents, "Invalid amount")?;

        let user = self
            .require_audit_user(&self.database, &cmd.audit_api_call_uuid)
            .await?;
        let before = self
            .require_deposit_in_household(&self.database, &user.household_uuid, &cmd.deposit_uuid)
            .await?;
        let fund = self
            .require_fund_in_household(&self.database, &user.household_uuid, &cmd.fund_uuid)
            .await?;

        let mut after = before.clone();
        after.fund_uuid = fund.uuid;
        after.date = cmd.date;
        after.amount_cents = cmd.amount_cents;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        if changes.is_empty() {
            return Ok(before);
        }

        after.updated_at = Utc::now();
        with_tx!(self, |db_tx| {
            if after.fund_uuid != before.fund_uuid {
                self.apply_fund_delta(&db_tx, &mut changes, &before.fund_uuid, -before.amount_cents)
                    .await?;
                self.apply_fund_delta(&db_tx, &mut changes, &after.fund_uuid, after.amount_cents)
                    .await?;
            } else {
                self.apply_fund_delta(
                    &db_tx,
                    &mut changes,
                    &after.fund_uuid,
                    after.amount_cents - before.amount_cents,
                )
                .await?;
            }

            let model = deposits::ActiveModel {
                uuid: ActiveValue::Set(after.uuid.clone()),
                fund_uuid: ActiveValue::Set(after.fund_uuid.clone()),
                date: ActiveValue::Set(after.date),
                amount_cents: ActiveValue::Set(after.amount_cents),
                updated_at: ActiveValue::Set(after.updated_at),
                ..Default::default()
            };
            model.update(&db_tx).await?;

            self.track_changes(&db_tx, &cmd.audit_api_call_uuid, changes)
                .await?;
            Ok(after)
        })
    }

    /// Soft-delete a deposit and take its amount back out of the fund.
    pub async fn delete_deposit(
        &self,
        audit_api_call_uuid: &str,
        deposit_uuid: &str,
    ) -> ResultEngine<()> {
        require_field(deposit_uuid, "Deposit is required")?;

        let user = self
            .require_audit_user(&self.database, audit_api_call_uuid)
            .await?;
        let before = self
            .require_deposit_in_household(&self.database, &user.household_uuid, deposit_uuid)
            .await?;

        with_tx!(self, |db_tx| {
            let mut changes = ChangeSet::new();
            changes.track_delete(&before, Utc::now());
            self.apply_fund_delta(&db_tx, &mut changes, &before.fund_uuid, -before.amount_cents)
                .await?;
            self.track_changes(&db_tx, audit_api_call_uuid, changes)
                .await?;
            Ok(())
        })
    }
}
