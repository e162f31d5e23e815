//! Tests for HTTP controller endpoints.
//!
//! Controllers are called directly with `State(AppState)` and an [`AuthUser`], checking
//! status codes, role requirements and error mapping.

mod facility;
mod maintenance;
mod solar_system;
mod survey;
mod techno_economic;
mod whatsapp;

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dream_test_utils::prelude::*;
use dream_tool::server::model::auth::Role;

use crate::util::{user, TestContextExt};

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
