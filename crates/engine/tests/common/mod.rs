#![allow(dead_code)]

//! Shared fixtures for engine integration tests.
//!
//! Tests run against in-memory SQLite with the full schema applied. Rows
//! that exist "before the request" (households, users, the audit API call)
//! are seeded directly; everything under test goes through engine
//! operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use engine::{
    Engine, audit_api_calls, audit_changes, categories, funds, household_members, households,
    subcategories, users, vendors,
};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

pub async fn create_household(db: &DatabaseConnection, name: &str) -> households::Model {
    let now = Utc::now();
    households::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_user(
    db: &DatabaseConnection,
    household_uuid: &str,
    email: &str,
) -> users::Model {
    let now = Utc::now();
    users::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        household_uuid: ActiveValue::Set(household_uuid.to_string()),
        email: ActiveValue::Set(email.to_string()),
        first_name: ActiveValue::Set("Jane".to_string()),
        last_name: ActiveValue::Set("Doe".to_string()),
        password: ActiveValue::Set("password".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_api_call(
    db: &DatabaseConnection,
    user_uuid: Option<&str>,
) -> audit_api_calls::Model {
    audit_api_calls::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        http_method: ActiveValue::Set("POST".to_string()),
        route: ActiveValue::Set("/test".to_string()),
        ip_address: ActiveValue::Set(Some("127.0.0.1".to_string())),
        user_agent: ActiveValue::Set(Some("engine-tests".to_string())),
        user_uuid: ActiveValue::Set(user_uuid.map(str::to_string)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_category(
    db: &DatabaseConnection,
    household_uuid: &str,
    name: &str,
) -> categories::Model {
    let now = Utc::now();
    categories::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        household_uuid: ActiveValue::Set(household_uuid.to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_subcategory(
    db: &DatabaseConnection,
    category_uuid: &str,
    name: &str,
) -> subcategories::Model {
    let now = Utc::now();
    subcategories::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        category_uuid: ActiveValue::Set(category_uuid.to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_vendor(
    db: &DatabaseConnection,
    household_uuid: &str,
    name: &str,
) -> vendors::Model {
    let now = Utc::now();
    vendors::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        household_uuid: ActiveValue::Set(household_uuid.to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_household_member(
    db: &DatabaseConnection,
    household_uuid: &str,
    name: &str,
) -> household_members::Model {
    let now = Utc::now();
    household_members::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        household_uuid: ActiveValue::Set(household_uuid.to_string()),
        name: ActiveValue::Set(name.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn fund_balance(db: &DatabaseConnection, fund_uuid: &str) -> i64 {
    funds::Entity::find_by_id(fund_uuid.to_string())
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .balance_cents
}

pub async fn changes_for(
    db: &DatabaseConnection,
    table: &str,
    key: &str,
) -> Vec<audit_changes::Model> {
    audit_changes::Entity::find()
        .filter(audit_changes::Column::TableName.eq(table))
        .filter(audit_changes::Column::Key.eq(key))
        .all(db)
        .await
        .unwrap()
}

pub async fn all_changes(db: &DatabaseConnection) -> Vec<audit_changes::Model> {
    audit_changes::Entity::find().all(db).await.unwrap()
}
