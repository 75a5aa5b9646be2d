use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{patch, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use std::sync::Arc;

use crate::{
    attachments, budgets, categories, employers, expenses, funds, household_members, households,
    incomes, loans, vendors,
};
use engine::{Engine, audit_api_calls, users};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
}

/// Request context for mutating handlers: the audit API call recorded for
/// this request and the authenticated user.
#[derive(Clone)]
pub struct AuditContext {
    pub audit_api_call_uuid: String,
    pub user: users::Model,
}

/// Authenticates the caller and records the audit API call.
///
/// The API call row is written before any controller logic runs, outside
/// the controller transaction; controllers re-resolve the acting user from
/// it when they mutate.
async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user: Option<users::Model> = users::Entity::find()
        .filter(users::Column::Email.eq(auth_header.username()))
        .filter(users::Column::Password.eq(auth_header.password()))
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let Some(user) = user else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let ip_address = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let user_agent = request
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let api_call = audit_api_calls::ActiveModel {
        uuid: ActiveValue::Set(Uuid::new_v4().to_string()),
        http_method: ActiveValue::Set(request.method().to_string()),
        route: ActiveValue::Set(request.uri().path().to_string()),
        ip_address: ActiveValue::Set(ip_address),
        user_agent: ActiveValue::Set(user_agent),
        user_uuid: ActiveValue::Set(Some(user.uuid.clone())),
        created_at: ActiveValue::Set(Utc::now()),
    };
    let api_call = api_call.insert(&state.db).await.map_err(|err| {
        tracing::error!("failed to record audit API call: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    request.extensions_mut().insert(AuditContext {
        audit_api_call_uuid: api_call.uuid,
        user,
    });
    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/household", patch(households::update))
        .route("/categories", post(categories::create))
        .route(
            "/categories/{uuid}",
            patch(categories::update).delete(categories::remove),
        )
        .route("/subcategories", post(categories::create_subcategory))
        .route(
            "/subcategories/{uuid}",
            patch(categories::update_subcategory).delete(categories::remove_subcategory),
        )
        .route("/vendors", post(vendors::create))
        .route(
            "/vendors/{uuid}",
            patch(vendors::update).delete(vendors::remove),
        )
        .route("/household-members", post(household_members::create))
        .route(
            "/household-members/{uuid}",
            patch(household_members::update).delete(household_members::remove),
        )
        .route("/employers", post(employers::create))
        .route(
            "/employers/{uuid}",
            patch(employers::update).delete(employers::remove),
        )
        .route("/budgets", post(budgets::create))
        .route(
            "/budgets/{uuid}",
            patch(budgets::update).delete(budgets::remove),
        )
        .route("/expenses", post(expenses::create))
        .route(
            "/expenses/{uuid}",
            patch(expenses::update).delete(expenses::remove),
        )
        .route("/incomes", post(incomes::create))
        .route(
            "/incomes/{uuid}",
            patch(incomes::update).delete(incomes::remove),
        )
        .route("/funds", post(funds::create))
        .route("/funds/{uuid}", patch(funds::update).delete(funds::remove))
        .route("/deposits", post(funds::create_deposit))
        .route(
            "/deposits/{uuid}",
            patch(funds::update_deposit).delete(funds::remove_deposit),
        )
        .route("/loans", post(loans::create))
        .route("/loans/{uuid}", patch(loans::update).delete(loans::remove))
        .route("/loans/{uuid}/archive", post(loans::archive))
        .route("/loan-payments", post(loans::create_payment))
        .route(
            "/loan-payments/{uuid}",
            patch(loans::update_payment).delete(loans::remove_payment),
        )
        .route("/attachments", post(attachments::create))
        .route(
            "/attachments/{uuid}",
            patch(attachments::update).delete(attachments::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run(engine: Engine, db: DatabaseConnection) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, db, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        db,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, db, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use base64::Engine as _;
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use sea_orm::{ConnectionTrait, Database, Statement};
    use tower::ServiceExt;

    async fn test_state() -> ServerState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let backend = db.get_database_backend();
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO households (uuid, name, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
            vec![
                "7b0e0e8e-0000-4000-8000-000000000001".into(),
                "Doe".into(),
                Utc::now().into(),
                Utc::now().into(),
            ],
        ))
        .await
        .unwrap();
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO users \
             (uuid, household_uuid, email, first_name, last_name, password, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            vec![
                "7b0e0e8e-0000-4000-8000-000000000002".into(),
                "7b0e0e8e-0000-4000-8000-000000000001".into(),
                "jane@example.com".into(),
                "Jane".into(),
                "Doe".into(),
                "password".into(),
                Utc::now().into(),
                Utc::now().into(),
            ],
        ))
        .await
        .unwrap();

        let engine = Engine::builder().database(db.clone()).build().await.unwrap();
        ServerState {
            engine: Arc::new(engine),
            db,
        }
    }

    fn basic_auth(email: &str, password: &str) -> String {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{email}:{password}"));
        format!("Basic {encoded}")
    }

    #[tokio::test]
    async fn rejects_unknown_credentials() {
        let state = test_state().await;
        let app = router(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/categories")
                    .header("content-type", "application/json")
                    .header("authorization", basic_auth("jane@example.com", "wrong"))
                    .body(Body::from(r#"{"name":"Essentials"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_category_records_audit_api_call() {
        let state = test_state().await;
        let db = state.db.clone();
        let app = router(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/categories")
                    .header("content-type", "application/json")
                    .header("user-agent", "hearth-tests")
                    .header("authorization", basic_auth("jane@example.com", "password"))
                    .body(Body::from(r#"{"name":"Essentials"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let view: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(view["name"], "Essentials");

        let api_calls = audit_api_calls::Entity::find().all(&db).await.unwrap();
        assert_eq!(api_calls.len(), 1);
        assert_eq!(api_calls[0].http_method, "POST");
        assert_eq!(api_calls[0].route, "/categories");
        assert_eq!(api_calls[0].user_agent.as_deref(), Some("hearth-tests"));
        assert!(api_calls[0].user_uuid.is_some());
    }
}
