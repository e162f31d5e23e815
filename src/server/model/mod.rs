//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every HTTP handler and
//! the bearer-token authentication types (roles, claims and the [`auth::AuthUser`]
//! extractor).

pub mod app;
pub mod auth;
