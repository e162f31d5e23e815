use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum NotFoundError {
    #[error("Facility {0} not found")]
    Facility(i32),
    #[error("No survey found for facility {0}")]
    Survey(i32),
    #[error("No techno-economic analysis found for facility {0}")]
    Analysis(i32),
    #[error("Solar system {0} not found")]
    SolarSystem(i32),
    #[error("Maintenance record {record_id} not found for solar system {system_id}")]
    MaintenanceRecord { system_id: i32, record_id: i32 },
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::NOT_FOUND, self.to_string())
    }
}
