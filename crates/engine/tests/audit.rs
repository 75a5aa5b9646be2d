//! Change-tracking behavior across the mutation lifecycle: creation diffs,
//! update diffs, soft deletes, audit-context failures, and rollback.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use engine::{
    Audited, ChangeSet, CreateBudgetCmd, EngineError, UpdateBudgetCmd, audit_logs, budgets, users,
};

mod common;
use common::*;

#[tokio::test]
async fn creating_a_budget_records_every_domain_attribute() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let api_call = create_api_call(&db, Some(&user.uuid)).await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let budget = engine
        .create_budget(
            CreateBudgetCmd::new(&api_call.uuid, &subcategory.uuid, 3, 2024, 50000)
                .notes("Monthly groceries"),
        )
        .await
        .unwrap();

    let changes = changes_for(&db, "budgets", &budget.uuid).await;
    let mut attributes: Vec<&str> = changes.iter().map(|c| c.attribute.as_str()).collect();
    attributes.sort_unstable();
    assert_eq!(
        attributes,
        vec!["amount_cents", "month", "notes", "subcategory_uuid", "year"]
    );
    assert!(changes.iter().all(|c| c.old_value.is_none()));

    let amount = changes.iter().find(|c| c.attribute == "amount_cents").unwrap();
    assert_eq!(amount.new_value.as_deref(), Some("50000"));
    let month = changes.iter().find(|c| c.attribute == "month").unwrap();
    assert_eq!(month.new_value.as_deref(), Some("3"));
}

#[tokio::test]
async fn updating_one_attribute_records_exactly_one_change() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let create_call = create_api_call(&db, Some(&user.uuid)).await;
    let budget = engine
        .create_budget(CreateBudgetCmd::new(
            &create_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_budget(UpdateBudgetCmd::new(
            &update_call.uuid,
            &budget.uuid,
            &subcategory.uuid,
            3,
            2025,
            50000,
        ))
        .await
        .unwrap();

    let changes = changes_for(&db, "budgets", &budget.uuid).await;
    let year_updates: Vec<_> = changes
        .iter()
        .filter(|c| c.attribute == "year" && c.old_value.is_some())
        .collect();
    assert_eq!(year_updates.len(), 1);
    assert_eq!(year_updates[0].old_value.as_deref(), Some("2024"));
    assert_eq!(year_updates[0].new_value.as_deref(), Some("2025"));

    // Month was sent unchanged: only the creation entry exists for it.
    let month_entries: Vec<_> = changes.iter().filter(|c| c.attribute == "month").collect();
    assert_eq!(month_entries.len(), 1);
    assert!(month_entries[0].old_value.is_none());
}

#[tokio::test]
async fn noop_update_produces_no_audit_rows() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let create_call = create_api_call(&db, Some(&user.uuid)).await;
    let budget = engine
        .create_budget(CreateBudgetCmd::new(
            &create_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();
    let before_count = all_changes(&db).await.len();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_budget(UpdateBudgetCmd::new(
            &update_call.uuid,
            &budget.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();

    assert_eq!(all_changes(&db).await.len(), before_count);
    // No audit log was opened for the no-op request either.
    let logs = audit_logs::Entity::find()
        .filter(audit_logs::Column::AuditApiCallUuid.eq(update_call.uuid.clone()))
        .all(&db)
        .await
        .unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn soft_delete_records_a_single_deleted_at_change() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let create_call = create_api_call(&db, Some(&user.uuid)).await;
    let budget = engine
        .create_budget(CreateBudgetCmd::new(
            &create_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();

    let delete_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .delete_budget(&delete_call.uuid, &budget.uuid)
        .await
        .unwrap();

    let changes = changes_for(&db, "budgets", &budget.uuid).await;
    let deleted: Vec<_> = changes
        .iter()
        .filter(|c| c.attribute == "deleted_at")
        .collect();
    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].old_value.is_none());
    assert!(deleted[0].new_value.is_some());

    // The row survives with deleted_at set, and stops resolving for
    // further mutations.
    let row = budgets::Entity::find_by_id(budget.uuid.clone())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(row.deleted_at.is_some());

    let second_call = create_api_call(&db, Some(&user.uuid)).await;
    let err = engine
        .delete_budget(&second_call.uuid, &budget.uuid)
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("Budget not found".to_string()));
}

#[tokio::test]
async fn non_paranoid_models_are_not_deleted_through_the_audit_path() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let api_call = create_api_call(&db, Some(&user.uuid)).await;

    let db_tx = db.begin().await.unwrap();
    let mut changes = ChangeSet::new();
    assert!(!changes.track_delete(&user, Utc::now()));
    assert!(changes.is_empty());
    engine
        .track_changes(&db_tx, &api_call.uuid, changes)
        .await
        .unwrap();
    db_tx.commit().await.unwrap();

    assert!(all_changes(&db).await.is_empty());
    let row = users::Entity::find_by_id(user.uuid.clone())
        .one(&db)
        .await
        .unwrap();
    assert!(row.is_some());
}

#[tokio::test]
async fn missing_api_call_rejects_before_any_write() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let err = engine
        .create_budget(CreateBudgetCmd::new(
            Uuid::new_v4().to_string(),
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Audit("Missing audit API call".to_string())
    );
    assert!(all_changes(&db).await.is_empty());
    assert!(
        budgets::Entity::find().all(&db).await.unwrap().is_empty()
    );
}

#[tokio::test]
async fn api_call_without_user_is_rejected() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let api_call = create_api_call(&db, None).await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &api_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Audit("Missing audit API call".to_string())
    );
}

#[tokio::test]
async fn api_call_with_unknown_user_is_rejected() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let api_call = create_api_call(&db, Some(&Uuid::new_v4().to_string())).await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &api_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Audit("Audit user does not exist".to_string())
    );
}

#[tokio::test]
async fn one_audit_log_per_api_call() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let api_call = create_api_call(&db, Some(&user.uuid)).await;

    // Two mutations attributed to the same request reuse one log.
    engine
        .create_vendor(&api_call.uuid, "Corner Store")
        .await
        .unwrap();
    engine
        .create_vendor(&api_call.uuid, "Hardware Store")
        .await
        .unwrap();

    let logs = audit_logs::Entity::find()
        .filter(audit_logs::Column::AuditApiCallUuid.eq(api_call.uuid.clone()))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);

    let changes = all_changes(&db).await;
    assert!(changes.iter().all(|c| c.audit_log_uuid == logs[0].uuid));
}

#[tokio::test]
async fn failed_tracking_rolls_back_the_business_mutation() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;

    // Apply a mutation on a transaction, then fail the tracking call with
    // an unknown API call: the whole transaction must roll back.
    let db_tx = db.begin().await.unwrap();
    let now = Utc::now();
    let vendor = engine::vendors::Model {
        uuid: Uuid::new_v4().to_string(),
        household_uuid: household.uuid.clone(),
        name: "Corner Store".to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };
    engine::vendors::ActiveModel {
        uuid: ActiveValue::Set(vendor.uuid.clone()),
        household_uuid: ActiveValue::Set(vendor.household_uuid.clone()),
        name: ActiveValue::Set(vendor.name.clone()),
        created_at: ActiveValue::Set(vendor.created_at),
        updated_at: ActiveValue::Set(vendor.updated_at),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(&db_tx)
    .await
    .unwrap();

    let mut changes = ChangeSet::new();
    changes.track_new(&vendor);
    let err = engine
        .track_changes(&db_tx, &Uuid::new_v4().to_string(), changes)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Audit("Missing audit API call".to_string())
    );
    drop(db_tx);

    assert!(all_changes(&db).await.is_empty());
    let rows = engine::vendors::Entity::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn change_keys_are_the_rows_primary_key_values() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let api_call = create_api_call(&db, Some(&user.uuid)).await;

    let vendor = engine
        .create_vendor(&api_call.uuid, "Corner Store")
        .await
        .unwrap();

    assert_eq!(vendor.key(), vendor.uuid);
    let changes = changes_for(&db, "vendors", &vendor.uuid).await;
    assert_eq!(changes.len(), 2);
    assert!(changes.iter().all(|c| c.key == vendor.uuid));
}
