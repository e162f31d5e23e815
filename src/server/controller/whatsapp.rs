use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        whatsapp::{
            SendMessageDto, WebhookPayload, WebhookSummaryDto, WebhookVerifyParams,
            WhatsAppMessageDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::whatsapp::WhatsAppService,
    },
};

pub static WHATSAPP_TAG: &str = "whatsapp";

/// Send a WhatsApp text message
#[utoipa::path(
    post,
    path = "/api/whatsapp/send",
    tag = WHATSAPP_TAG,
    security(("bearer_auth" = [])),
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent", body = WhatsAppMessageDto),
        (status = 400, description = "Missing recipient or body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the manager role", body = ErrorDto),
        (status = 500, description = "WhatsApp API call failed", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthUser,
    Json(message): Json<SendMessageDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Manager)?;

    let message = WhatsAppService::new(&state.db, &state.whatsapp)
        .send(message)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Webhook subscription handshake
///
/// Echoes `hub.challenge` when `hub.verify_token` matches the configured token.
#[utoipa::path(
    get,
    path = "/api/whatsapp/webhook",
    tag = WHATSAPP_TAG,
    params(WebhookVerifyParams),
    responses(
        (status = 200, description = "Challenge echoed", body = String, content_type = "text/plain"),
        (status = 403, description = "Verification failed", body = ErrorDto)
    ),
)]
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<WebhookVerifyParams>,
) -> Result<impl IntoResponse, Error> {
    let challenge = WhatsAppService::new(&state.db, &state.whatsapp).verify(params)?;

    Ok((StatusCode::OK, challenge))
}

/// Receive inbound messages and delivery status updates
#[utoipa::path(
    post,
    path = "/api/whatsapp/webhook",
    tag = WHATSAPP_TAG,
    request_body = WebhookPayload,
    responses(
        (status = 200, description = "Webhook processed", body = WebhookSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Result<impl IntoResponse, Error> {
    let summary = WhatsAppService::new(&state.db, &state.whatsapp)
        .handle_webhook(payload)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
