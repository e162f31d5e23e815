use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::sea_orm_active_enums::{AnalysisStage, CostingMethod, MaintenanceStatus};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Costing method {method:?} is not allowed at the {stage:?} stage")]
    CostingStageMismatch {
        method: CostingMethod,
        stage: AnalysisStage,
    },
    #[error("A survey with external_id {0:?} already exists")]
    DuplicateExternalId(String),
    #[error("Maintenance record {record_id} cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        record_id: i32,
        from: MaintenanceStatus,
        to: MaintenanceStatus,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
