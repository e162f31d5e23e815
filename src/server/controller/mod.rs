//! HTTP controller endpoints for the DREAM Tool API.
//!
//! Axum handlers for facilities, surveys, techno-economic analyses, solar systems,
//! maintenance and WhatsApp messaging. Handlers check the caller's role through
//! [`AuthUser`](crate::server::model::auth::AuthUser), delegate to a service and map the
//! result to a JSON response. Every handler is annotated for utoipa's OpenAPI document.

pub mod facility;
pub mod maintenance;
pub mod solar_system;
pub mod survey;
pub mod techno_economic;
pub mod whatsapp;
