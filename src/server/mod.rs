//! Server application core modules.
//!
//! This module contains the backend of the DREAM Tool: HTTP routing and controllers,
//! bearer-token authentication, database repositories, the techno-economic and
//! maintenance services, WhatsApp messaging, and the optional maintenance sweep
//! scheduler.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
