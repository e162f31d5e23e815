//! Test fixtures for database records and HTTP mocks.
//!
//! - `auth` - Bearer tokens signed with the test secret
//! - `factory` - Pure functions building JSON payloads with standard test values
//! - `facility`, `survey`, `solar_system`, `maintenance` - Database record fixtures
//! - `whatsapp` - Message records and mock WhatsApp Cloud API endpoints

pub mod auth;
pub mod facility;
pub mod factory;
pub mod maintenance;
pub mod solar_system;
pub mod survey;
pub mod whatsapp;
