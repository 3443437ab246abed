use axum_test::TestServer;
use serde_json::json;

mod test_utils;

#[tokio::test]
async fn test_health_check() {
    let app = slotbook_api::routes::health::routes().with_state(test_utils::build_state());
    let server = TestServer::new(app).expect("test server should start");

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "service": "slotbook-api" }));
}

#[tokio::test]
async fn test_version_reports_package_version() {
    let app = slotbook_api::routes::health::routes().with_state(test_utils::build_state());
    let server = TestServer::new(app).expect("test server should start");

    let response = server.get("/version").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "version": env!("CARGO_PKG_VERSION") }));
}
