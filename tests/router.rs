//! Requests through the full router, covering bearer token extraction.

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Request, StatusCode},
};
use dream_test_utils::prelude::*;
use dream_tool::server::router::routes;
use tower::ServiceExt;

use crate::util::TestContextExt;

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {}", token));
    }

    request.body(Body::empty()).unwrap()
}

/// Expect 401 Unauthorized without a bearer token
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;
    let app = routes().with_state(test.into_app_state());

    let resp = app.oneshot(get("/api/facilities", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 Unauthorized for an expired token
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;
    let app = routes().with_state(test.into_app_state());

    let token = expired_bearer_token("admin");
    let resp = app
        .oneshot(get("/api/facilities", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 OK for a valid viewer token
#[tokio::test]
async fn accepts_valid_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Facility)
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let token = bearer_token("viewer");
    let resp = app
        .oneshot(get("/api/facilities/1", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden when a viewer posts a facility
#[tokio::test]
async fn rejects_insufficient_role() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method("POST")
        .uri("/api/facilities")
        .header(AUTHORIZATION, format!("Bearer {}", bearer_token("viewer")))
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Clinic"}"#))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the webhook handshake to need no bearer token
#[tokio::test]
async fn webhook_verification_is_public() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = routes().with_state(test.into_app_state());

    let uri = format!(
        "/api/whatsapp/webhook?hub.mode=subscribe&hub.verify_token={}&hub.challenge=42",
        TEST_WHATSAPP_VERIFY_TOKEN
    );
    let resp = app.oneshot(get(&uri, None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"42");

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/solar-system/{system_id}/schedule/optimize"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());

    Ok(())
}
