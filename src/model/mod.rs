//! API data transfer objects.
//!
//! Request and response bodies exchanged over the HTTP API, plus the survey
//! snapshot types that are stored as JSON columns.

pub mod api;
pub mod facility;
pub mod maintenance;
pub mod solar_system;
pub mod survey;
pub mod techno_economic;
pub mod whatsapp;
