//! Audit plumbing: acting-user resolution, audit-log lifecycle, and change
//! persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    QueryFilter, Statement,
};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, audit::ChangeSet, audit_api_calls, audit_changes, audit_logs, users,
};

use super::Engine;

impl Engine {
    /// Resolve the audit API call and the user acting through it.
    ///
    /// Every mutating operation starts here: a missing API call record, or
    /// one without an acting user, means the mutation cannot be attributed
    /// and is rejected before anything is written.
    pub(super) async fn require_audit_user<C: ConnectionTrait>(
        &self,
        db: &C,
        audit_api_call_uuid: &str,
    ) -> ResultEngine<users::Model> {
        let api_call = audit_api_calls::Entity::find_by_id(audit_api_call_uuid.to_string())
            .one(db)
            .await?;
        let user_uuid = api_call
            .and_then(|call| call.user_uuid)
            .ok_or_else(|| EngineError::Audit("Missing audit API call".to_string()))?;

        users::Entity::find_by_id(user_uuid)
            .one(db)
            .await?
            .ok_or_else(|| EngineError::Audit("Audit user does not exist".to_string()))
    }

    /// Resolve or create the single audit log for an API call.
    ///
    /// One log exists per request; repeated `track_changes` calls within the
    /// same request reuse it.
    async fn resolve_audit_log(
        &self,
        db_tx: &DatabaseTransaction,
        audit_api_call_uuid: &str,
    ) -> ResultEngine<audit_logs::Model> {
        if let Some(log) = audit_logs::Entity::find()
            .filter(audit_logs::Column::AuditApiCallUuid.eq(audit_api_call_uuid.to_string()))
            .one(db_tx)
            .await?
        {
            return Ok(log);
        }

        let log = audit_logs::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
            audit_api_call_uuid: ActiveValue::Set(audit_api_call_uuid.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        };
        Ok(log.insert(db_tx).await?)
    }

    /// Persist a [`ChangeSet`] on the caller's transaction.
    ///
    /// Executes the scheduled soft deletes and writes one `audit_changes`
    /// row per entry, all owned by the API call's audit log. The caller's
    /// transaction makes this atomic with the business mutation: any error
    /// here rolls back both.
    pub async fn track_changes(
        &self,
        db_tx: &DatabaseTransaction,
        audit_api_call_uuid: &str,
        changes: ChangeSet,
    ) -> ResultEngine<()> {
        let api_call = audit_api_calls::Entity::find_by_id(audit_api_call_uuid.to_string())
            .one(db_tx)
            .await?;
        if !api_call.is_some_and(|call| call.user_uuid.is_some()) {
            return Err(EngineError::Audit("Missing audit API call".to_string()));
        }

        let log = self.resolve_audit_log(db_tx, audit_api_call_uuid).await?;

        let backend = db_tx.get_database_backend();
        for delete in changes.deletes() {
            // Table and column names come from `Audited` constants, never
            // from user input.
            let stmt = Statement::from_sql_and_values(
                backend,
                format!(
                    "UPDATE \"{}\" SET deleted_at = ? WHERE \"{}\" = ?",
                    delete.table, delete.primary_key
                ),
                vec![delete.deleted_at.into(), delete.key.clone().into()],
            );
            db_tx.execute(stmt).await?;
        }

        let now = Utc::now();
        for entry in changes.entries() {
            let change = audit_changes::ActiveModel {
                uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
                audit_log_uuid: ActiveValue::Set(log.uuid.clone()),
                table_name: ActiveValue::Set(entry.table.to_string()),
                key: ActiveValue::Set(entry.key.clone()),
                attribute: ActiveValue::Set(entry.attribute.to_string()),
                old_value: ActiveValue::Set(entry.old_value.clone()),
                new_value: ActiveValue::Set(entry.new_value.clone()),
                created_at: ActiveValue::Set(now),
            };
            change.insert(db_tx).await?;
        }

        Ok(())
    }
}
