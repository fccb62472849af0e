mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/health", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_describes_service() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("version").is_some(), "root should report a version: {}", body);
    Ok(())
}

#[tokio::test]
async fn health_reports_degraded_when_store_is_down() -> Result<()> {
    let app = common::app_with_repo(std::sync::Arc::new(common::FailingRepository));

    let (status, body) = common::send(&app, "GET", "/health", None, None).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    assert!(body["timestamp"].is_string());
    Ok(())
}
