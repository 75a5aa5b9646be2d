//! Loan balance maintenance through payments, and archival.

use chrono::NaiveDate;

use engine::{CreateLoanCmd, CreateLoanPaymentCmd, EngineError, UpdateLoanPaymentCmd};
use sea_orm::EntityTrait;

mod common;
use common::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn loan_balance(db: &sea_orm::DatabaseConnection, loan_uuid: &str) -> i64 {
    engine::loans::Entity::find_by_id(loan_uuid.to_string())
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .balance_cents
}

#[tokio::test]
async fn payments_reduce_the_loan_balance_by_principal_only() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let loan = engine
        .create_loan(CreateLoanCmd::new(&call.uuid, "Car", 1_000_000))
        .await
        .unwrap();
    assert_eq!(loan.balance_cents, 1_000_000);

    let payment_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .create_loan_payment(CreateLoanPaymentCmd::new(
            &payment_call.uuid,
            &loan.uuid,
            date(2024, 3, 9),
            40_000,
            10_000,
        ))
        .await
        .unwrap();

    assert_eq!(loan_balance(&db, &loan.uuid).await, 960_000);
}

#[tokio::test]
async fn changing_payment_principal_applies_the_difference() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let loan = engine
        .create_loan(CreateLoanCmd::new(&call.uuid, "Car", 1_000_000))
        .await
        .unwrap();
    let payment_call = create_api_call(&db, Some(&user.uuid)).await;
    let payment = engine
        .create_loan_payment(CreateLoanPaymentCmd::new(
            &payment_call.uuid,
            &loan.uuid,
            date(2024, 3, 9),
            40_000,
            10_000,
        ))
        .await
        .unwrap();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_loan_payment(UpdateLoanPaymentCmd::new(
            &update_call.uuid,
            &payment.uuid,
            date(2024, 3, 9),
            60_000,
            10_000,
        ))
        .await
        .unwrap();

    assert_eq!(loan_balance(&db, &loan.uuid).await, 940_000);
}

#[tokio::test]
async fn deleting_a_payment_restores_the_balance() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let loan = engine
        .create_loan(CreateLoanCmd::new(&call.uuid, "Car", 1_000_000))
        .await
        .unwrap();
    let payment_call = create_api_call(&db, Some(&user.uuid)).await;
    let payment = engine
        .create_loan_payment(CreateLoanPaymentCmd::new(
            &payment_call.uuid,
            &loan.uuid,
            date(2024, 3, 9),
            40_000,
            10_000,
        ))
        .await
        .unwrap();

    let delete_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .delete_loan_payment(&delete_call.uuid, &payment.uuid)
        .await
        .unwrap();

    assert_eq!(loan_balance(&db, &loan.uuid).await, 1_000_000);
}

#[tokio::test]
async fn archiving_records_the_archived_at_change_once() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let loan = engine
        .create_loan(CreateLoanCmd::new(&call.uuid, "Car", 1_000_000))
        .await
        .unwrap();

    let archive_call = create_api_call(&db, Some(&user.uuid)).await;
    let archived = engine
        .archive_loan(&archive_call.uuid, &loan.uuid)
        .await
        .unwrap();
    assert!(archived.archived_at.is_some());

    let changes = changes_for(&db, "loans", &loan.uuid).await;
    let archived_changes: Vec<_> = changes
        .iter()
        .filter(|c| c.attribute == "archived_at" && c.old_value.is_none() && c.new_value.is_some())
        .collect();
    assert_eq!(archived_changes.len(), 1);

    // Archiving again is a no-op.
    let before_count = all_changes(&db).await.len();
    let second_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .archive_loan(&second_call.uuid, &loan.uuid)
        .await
        .unwrap();
    assert_eq!(all_changes(&db).await.len(), before_count);
}

#[tokio::test]
async fn another_households_loan_reads_as_not_found() {
    let (engine, db) = engine_with_db().await;
    let household1 = create_household(&db, "Doe").await;
    let user1 = create_user(&db, &household1.uuid, "jane@example.com").await;
    let household2 = create_household(&db, "Smith").await;
    let user2 = create_user(&db, &household2.uuid, "john@example.com").await;

    let owner_call = create_api_call(&db, Some(&user2.uuid)).await;
    let loan = engine
        .create_loan(CreateLoanCmd::new(&owner_call.uuid, "Car", 1_000_000))
        .await
        .unwrap();

    let intruder_call = create_api_call(&db, Some(&user1.uuid)).await;
    let err = engine
        .create_loan_payment(CreateLoanPaymentCmd::new(
            &intruder_call.uuid,
            &loan.uuid,
            date(2024, 3, 9),
            40_000,
            10_000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("Loan not found".to_string()));
}
