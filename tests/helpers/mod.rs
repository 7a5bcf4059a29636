// Shared test helpers.
//
// Integration tests run against an in-memory SQLite database. The pool is
// pinned to a single connection because each `sqlite::memory:` connection is
// its own database.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Nudge the clock so `created_at` ordering is unambiguous between inserts
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(15)).await;
}

/// Issue a request against the test app and decode the JSON envelope.
/// Returns `(status, body)`.
macro_rules! request_json {
    ($app:expr, $method:ident, $uri:expr) => {{
        let req = actix_web::test::TestRequest::$method().uri($uri).to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
    ($app:expr, $method:ident, $uri:expr, $body:expr) => {{
        let req = actix_web::test::TestRequest::$method()
            .uri($uri)
            .set_json($body)
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}
