mod test_utils;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use common::{
    TestError, TestResult, test_assert_eq,
    test_helpers::test_utils::{build_request, check_status_code, serialize_json},
};
use http_body_util::BodyExt;
use processing::model::{ErrorResponse, PointsResponse, ProcessResponse};
use tower::ServiceExt;

use test_utils::{MockStore, corner_market_receipt, create_in_memory_app, create_test_app};

async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> TestResult<Response<Body>> {
    let request = build_request(method, uri, body)?;
    let (parts, body) = request.into_parts();
    let request = Request::from_parts(parts, Body::from(body));

    app.clone()
        .oneshot(request)
        .await
        .map_err(|e| TestError::generic(format!("Request failed: {}", e)))
}

async fn response_body_string(response: Response<Body>) -> TestResult<String> {
    let bytes = response
        .into_body()
        .collect()
        .await
        .map_err(|e| TestError::generic(format!("Failed to read body: {}", e)))?
        .to_bytes();
    String::from_utf8(bytes.to_vec()).map_err(|e| TestError::generic(e.to_string()))
}

#[tokio::test]
async fn test_process_then_get_points() -> TestResult {
    let app = create_in_memory_app();

    let body = serialize_json(&corner_market_receipt())?;
    let response = send(&app, "POST", "/receipts/process", Some(body)).await?;
    check_status_code(response.status(), StatusCode::OK)?;
    let processed: ProcessResponse = serde_json::from_str(&response_body_string(response).await?)?;

    let uri = format!("/receipts/{}/points", processed.id);
    let response = send(&app, "GET", &uri, None).await?;
    check_status_code(response.status(), StatusCode::OK)?;
    let points: PointsResponse = serde_json::from_str(&response_body_string(response).await?)?;

    test_assert_eq!(points.points, 109);
    Ok(())
}

#[tokio::test]
async fn test_process_accepts_wire_format() -> TestResult {
    let app = create_in_memory_app();
    let body = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "13:13",
        "total": "1.25",
        "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}]
    }"#;

    let response = send(&app, "POST", "/receipts/process", Some(body.to_string())).await?;
    check_status_code(response.status(), StatusCode::OK)?;
    let processed: ProcessResponse = serde_json::from_str(&response_body_string(response).await?)?;

    let response = send(&app, "GET", &format!("/receipts/{}/points", processed.id), None).await?;
    let points: PointsResponse = serde_json::from_str(&response_body_string(response).await?)?;
    // 6 retailer + 25 quarter multiple
    test_assert_eq!(points.points, 31);
    Ok(())
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "GET", "/receipts/does-not-exist/points", None).await?;
    check_status_code(response.status(), StatusCode::NOT_FOUND)?;

    let error: ErrorResponse = serde_json::from_str(&response_body_string(response).await?)?;
    test_assert_eq!(error.error.contains("does-not-exist"), true);
    Ok(())
}

#[tokio::test]
async fn test_undecodable_entry_returns_server_error() -> TestResult {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| Ok(Some(b"[]".to_vec())));
    let app = create_test_app(Arc::new(store));

    let response = send(&app, "GET", "/receipts/receipt-1/points", None).await?;
    check_status_code(response.status(), StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(())
}

#[tokio::test]
async fn test_process_rejects_invalid_json() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "POST", "/receipts/process", Some("{invalid json}".to_string())).await?;
    check_status_code(response.status(), StatusCode::BAD_REQUEST)?;
    Ok(())
}

#[tokio::test]
async fn test_process_rejects_missing_fields() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "POST", "/receipts/process", Some(r#"{"retailer": "Target"}"#.to_string())).await?;
    check_status_code(response.status(), StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "GET", "/health", None).await?;
    check_status_code(response.status(), StatusCode::OK)?;
    test_assert_eq!(response_body_string(response).await?, "OK");
    Ok(())
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() -> TestResult {
    let app = create_in_memory_app();

    let response = send(&app, "GET", "/metrics", None).await?;
    check_status_code(response.status(), StatusCode::NOT_FOUND)?;
    Ok(())
}
