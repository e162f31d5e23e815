use axum::extract::Query;
use dream_tool::{
    model::whatsapp::{SendMessageDto, WebhookPayload, WebhookVerifyParams},
    server::controller::whatsapp::{receive_webhook, send_message, verify_webhook},
};

use super::*;

fn message() -> SendMessageDto {
    SendMessageDto {
        to: "+254700000000".to_string(),
        body: "Your maintenance visit is confirmed".to_string(),
    }
}

/// Expect 200 OK with the message recorded as sent
#[tokio::test]
async fn sends_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhatsappMessage)
        .with_send_message_endpoint("wamid.ok", 1)
        .build()
        .await?;

    let result = send_message(
        State(test.into_app_state()),
        user(Role::Manager),
        Json(message()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "sent");
    assert_eq!(body["external_message_id"], "wamid.ok");
    test.assert_mocks();

    Ok(())
}

/// Expect 500 Internal Server Error when the API rejects the message
#[tokio::test]
async fn send_failure_returns_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhatsappMessage)
        .with_send_message_error_endpoint(401, 1)
        .build()
        .await?;

    let result = send_message(
        State(test.into_app_state()),
        user(Role::Manager),
        Json(message()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    test.assert_mocks();

    Ok(())
}

/// Expect a technician to be refused sending without calling the API
#[tokio::test]
async fn technician_cannot_send() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhatsappMessage)
        .with_send_message_endpoint("wamid.ok", 0)
        .build()
        .await?;

    let result = send_message(
        State(test.into_app_state()),
        user(Role::Technician),
        Json(message()),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );
    test.assert_mocks();

    Ok(())
}

/// Expect the challenge echoed for the configured verify token
#[tokio::test]
async fn verifies_webhook_subscription() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = verify_webhook(
        State(test.into_app_state()),
        Query(WebhookVerifyParams {
            mode: "subscribe".to_string(),
            verify_token: TEST_WHATSAPP_VERIFY_TOKEN.to_string(),
            challenge: "1158201444".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"1158201444");

    Ok(())
}

/// Expect 403 Forbidden for a wrong verify token
#[tokio::test]
async fn rejects_wrong_verify_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = verify_webhook(
        State(test.into_app_state()),
        Query(WebhookVerifyParams {
            mode: "subscribe".to_string(),
            verify_token: "guess".to_string(),
            challenge: "1158201444".to_string(),
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

/// Expect status updates applied to known outbound messages
#[tokio::test]
async fn applies_webhook_status_update() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::WhatsappMessage)?;
    test.whatsapp()
        .insert_outbound_message(
            "254700000000",
            Some("wamid.out"),
            entity::sea_orm_active_enums::MessageStatus::Sent,
        )
        .await?;

    let payload: WebhookPayload = serde_json::from_value(serde_json::json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "1",
            "changes": [{
                "field": "messages",
                "value": { "statuses": [{ "id": "wamid.out", "status": "read" }] }
            }]
        }]
    }))
    .unwrap();

    let resp = receive_webhook(State(test.into_app_state()), Json(payload))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status_updates"], 1);
    assert_eq!(body["received"], 0);

    Ok(())
}
