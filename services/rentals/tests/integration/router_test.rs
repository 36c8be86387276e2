use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use rentman_domain::clock::SystemClock;
use rentman_rentals::router::build_router;
use rentman_rentals::state::AppState;

// Smoke tests against the assembled router. The state carries a disconnected
// database handle, so only routes that never touch the database are exercised.
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        clock: Arc::new(SystemClock),
        media_root: "media".into(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = test_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let server = test_server();
    let response = server.get("/no-such-route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_non_numeric_path_id() {
    let server = test_server();
    let response = server.get("/persons/not-a-number").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
