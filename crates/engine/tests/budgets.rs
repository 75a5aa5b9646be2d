//! Budget business rules: duplicates and household isolation.

use engine::{CreateBudgetCmd, EngineError, UpdateBudgetCmd};

mod common;
use common::*;

#[tokio::test]
async fn duplicate_budget_is_rejected_with_no_audit_rows() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let first_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .create_budget(CreateBudgetCmd::new(
            &first_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();
    let before_count = all_changes(&db).await.len();

    let second_call = create_api_call(&db, Some(&user.uuid)).await;
    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &second_call.uuid,
            &subcategory.uuid,
            3,
            2024,
            75000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::Conflict("Duplicate budget".to_string()));
    assert_eq!(all_changes(&db).await.len(), before_count);
}

#[tokio::test]
async fn a_budget_can_move_to_a_free_month() {
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
    let updated = engine
        .update_budget(UpdateBudgetCmd::new(
            &update_call.uuid,
            &budget.uuid,
            &subcategory.uuid,
            4,
            2024,
            50000,
        ))
        .await
        .unwrap();
    assert_eq!(updated.month, 4);
}

#[tokio::test]
async fn updating_onto_an_occupied_month_conflicts() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .create_budget(CreateBudgetCmd::new(
            &call.uuid,
            &subcategory.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();
    let other_call = create_api_call(&db, Some(&user.uuid)).await;
    let other = engine
        .create_budget(CreateBudgetCmd::new(
            &other_call.uuid,
            &subcategory.uuid,
            4,
            2024,
            60000,
        ))
        .await
        .unwrap();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    let err = engine
        .update_budget(UpdateBudgetCmd::new(
            &update_call.uuid,
            &other.uuid,
            &subcategory.uuid,
            3,
            2024,
            60000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::Conflict("Duplicate budget".to_string()));
}

#[tokio::test]
async fn another_households_subcategory_reads_as_not_found() {
    let (engine, db) = engine_with_db().await;
    let household1 = create_household(&db, "Doe").await;
    let user1 = create_user(&db, &household1.uuid, "jane@example.com").await;
    let household2 = create_household(&db, "Smith").await;
    let category2 = create_category(&db, &household2.uuid, "Essentials").await;
    let subcategory2 = create_subcategory(&db, &category2.uuid, "Groceries").await;

    let api_call = create_api_call(&db, Some(&user1.uuid)).await;
    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &api_call.uuid,
            &subcategory2.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("Category not found".to_string()));
    assert!(all_changes(&db).await.is_empty());
}

#[tokio::test]
async fn another_households_budget_cannot_be_updated() {
    let (engine, db) = engine_with_db().await;
    let household1 = create_household(&db, "Doe").await;
    let user1 = create_user(&db, &household1.uuid, "jane@example.com").await;
    let household2 = create_household(&db, "Smith").await;
    let user2 = create_user(&db, &household2.uuid, "john@example.com").await;
    let category2 = create_category(&db, &household2.uuid, "Essentials").await;
    let subcategory2 = create_subcategory(&db, &category2.uuid, "Groceries").await;

    let owner_call = create_api_call(&db, Some(&user2.uuid)).await;
    let budget = engine
        .create_budget(CreateBudgetCmd::new(
            &owner_call.uuid,
            &subcategory2.uuid,
            3,
            2024,
            50000,
        ))
        .await
        .unwrap();
    let before_count = all_changes(&db).await.len();

    let intruder_call = create_api_call(&db, Some(&user1.uuid)).await;
    let err = engine
        .update_budget(UpdateBudgetCmd::new(
            &intruder_call.uuid,
            &budget.uuid,
            &subcategory2.uuid,
            3,
            2025,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("Budget not found".to_string()));
    assert_eq!(all_changes(&db).await.len(), before_count);
}

#[tokio::test]
async fn out_of_range_fields_fail_validation() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;
    let category = create_category(&db, &household.uuid, "Essentials").await;
    let subcategory = create_subcategory(&db, &category.uuid, "Groceries").await;
    let api_call = create_api_call(&db, Some(&user.uuid)).await;

    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &api_call.uuid,
            &subcategory.uuid,
            12,
            2024,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::Validation("Invalid month".to_string()));

    let err = engine
        .create_budget(CreateBudgetCmd::new(
            &api_call.uuid,
            &subcategory.uuid,
            3,
            1999,
            50000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::Validation("Invalid year".to_string()));

    assert!(all_changes(&db).await.is_empty());
}
