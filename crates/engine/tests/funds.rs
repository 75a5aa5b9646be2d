//! Fund balance maintenance through deposits.

use chrono::NaiveDate;

use engine::{CreateDepositCmd, EngineError, UpdateDepositCmd, audit_logs};
use sea_orm::EntityTrait;

mod common;
use common::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn deposits_accumulate_into_the_fund_balance() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let fund = engine.create_fund(&call.uuid, "Vacation").await.unwrap();
    assert_eq!(fund.balance_cents, 0);

    let deposit_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .create_deposit(CreateDepositCmd::new(
            &deposit_call.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();
    assert_eq!(fund_balance(&db, &fund.uuid).await, 100_000);

    let second_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .create_deposit(CreateDepositCmd::new(
            &second_call.uuid,
            &fund.uuid,
            date(2024, 4, 9),
            50_000,
        ))
        .await
        .unwrap();
    assert_eq!(fund_balance(&db, &fund.uuid).await, 150_000);
}

#[tokio::test]
async fn changing_a_deposit_amount_applies_the_difference() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let fund = engine.create_fund(&call.uuid, "Vacation").await.unwrap();
    let deposit_call = create_api_call(&db, Some(&user.uuid)).await;
    let deposit = engine
        .create_deposit(CreateDepositCmd::new(
            &deposit_call.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_deposit(UpdateDepositCmd::new(
            &update_call.uuid,
            &deposit.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            150_000,
        ))
        .await
        .unwrap();

    assert_eq!(fund_balance(&db, &fund.uuid).await, 150_000);

    // The deposit change and the fund balance change share one audit log.
    let logs = audit_logs::Entity::find().all(&db).await.unwrap();
    let update_log = logs
        .iter()
        .find(|l| l.audit_api_call_uuid == update_call.uuid)
        .unwrap();
    let changes = all_changes(&db).await;
    let in_update_log: Vec<_> = changes
        .iter()
        .filter(|c| c.audit_log_uuid == update_log.uuid)
        .collect();
    assert!(
        in_update_log
            .iter()
            .any(|c| c.table_name == "deposits" && c.attribute == "amount_cents")
    );
    let fund_change = in_update_log
        .iter()
        .find(|c| c.table_name == "funds" && c.attribute == "balance_cents")
        .unwrap();
    assert_eq!(fund_change.old_value.as_deref(), Some("100000"));
    assert_eq!(fund_change.new_value.as_deref(), Some("150000"));
}

#[tokio::test]
async fn retargeting_a_deposit_moves_the_full_amount() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let fund1 = engine.create_fund(&call.uuid, "Vacation").await.unwrap();
    let fund2_call = create_api_call(&db, Some(&user.uuid)).await;
    let fund2 = engine
        .create_fund(&fund2_call.uuid, "Emergency")
        .await
        .unwrap();

    let deposit_call = create_api_call(&db, Some(&user.uuid)).await;
    let deposit = engine
        .create_deposit(CreateDepositCmd::new(
            &deposit_call.uuid,
            &fund1.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_deposit(UpdateDepositCmd::new(
            &update_call.uuid,
            &deposit.uuid,
            &fund2.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();

    assert_eq!(fund_balance(&db, &fund1.uuid).await, 0);
    assert_eq!(fund_balance(&db, &fund2.uuid).await, 100_000);
}

#[tokio::test]
async fn noop_deposit_update_touches_nothing() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let fund = engine.create_fund(&call.uuid, "Vacation").await.unwrap();
    let deposit_call = create_api_call(&db, Some(&user.uuid)).await;
    let deposit = engine
        .create_deposit(CreateDepositCmd::new(
            &deposit_call.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();
    let before_count = all_changes(&db).await.len();

    let update_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .update_deposit(UpdateDepositCmd::new(
            &update_call.uuid,
            &deposit.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();

    assert_eq!(all_changes(&db).await.len(), before_count);
    assert_eq!(fund_balance(&db, &fund.uuid).await, 100_000);
}

#[tokio::test]
async fn deleting_a_deposit_takes_its_amount_back() {
    let (engine, db) = engine_with_db().await;
    let household = create_household(&db, "Doe").await;
    let user = create_user(&db, &household.uuid, "jane@example.com").await;

    let call = create_api_call(&db, Some(&user.uuid)).await;
    let fund = engine.create_fund(&call.uuid, "Vacation").await.unwrap();
    let deposit_call = create_api_call(&db, Some(&user.uuid)).await;
    let deposit = engine
        .create_deposit(CreateDepositCmd::new(
            &deposit_call.uuid,
            &fund.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap();

    let delete_call = create_api_call(&db, Some(&user.uuid)).await;
    engine
        .delete_deposit(&delete_call.uuid, &deposit.uuid)
        .await
        .unwrap();

    assert_eq!(fund_balance(&db, &fund.uuid).await, 0);
    let changes = changes_for(&db, "deposits", &deposit.uuid).await;
    assert!(changes.iter().any(|c| c.attribute == "deleted_at"));
}

#[tokio::test]
async fn another_households_fund_reads_as_not_found() {
    let (engine, db) = engine_with_db().await;
    let household1 = create_household(&db, "Doe").await;
    let user1 = create_user(&db, &household1.uuid, "jane@example.com").await;
    let household2 = create_household(&db, "Smith").await;
    let user2 = create_user(&db, &household2.uuid, "john@example.com").await;

    let fund_call = create_api_call(&db, Some(&user2.uuid)).await;
    let fund2 = engine
        .create_fund(&fund_call.uuid, "Vacation")
        .await
        .unwrap();
    let before_count = all_changes(&db).await.len();

    let api_call = create_api_call(&db, Some(&user1.uuid)).await;
    let err = engine
        .create_deposit(CreateDepositCmd::new(
            &api_call.uuid,
            &fund2.uuid,
            date(2024, 3, 9),
            100_000,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("Fund not found".to_string()));
    assert_eq!(all_changes(&db).await.len(), before_count);
    assert_eq!(fund_balance(&db, &fund2.uuid).await, 0);
}
