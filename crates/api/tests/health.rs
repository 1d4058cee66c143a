mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{build_test_app, expect_json, get};

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_live_database(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/health").await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
    assert!(body["version"].is_string());
}
