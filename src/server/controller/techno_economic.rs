use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        techno_economic::{AnalysisDto, CalculationRequestDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::techno_economic::TechnoEconomicService,
    },
};

pub static TECHNO_ECONOMIC_TAG: &str = "techno-economic";

/// Run a techno-economic analysis on the facility's latest survey
#[utoipa::path(
    post,
    path = "/api/techno-economic/{facility_id}",
    tag = TECHNO_ECONOMIC_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    request_body = CalculationRequestDto,
    responses(
        (status = 201, description = "Analysis calculated and stored", body = AnalysisDto),
        (status = 400, description = "Invalid calculation parameters", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Facility or survey not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
    Json(request): Json<CalculationRequestDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    let analysis = TechnoEconomicService::new(&state.db)
        .calculate(facility_id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// Get the most recent analysis of a facility
#[utoipa::path(
    get,
    path = "/api/techno-economic/{facility_id}",
    tag = TECHNO_ECONOMIC_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Latest analysis", body = AnalysisDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No analysis for the facility", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_analysis(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let analysis = TechnoEconomicService::new(&state.db)
        .get_latest(facility_id)
        .await?;

    Ok((StatusCode::OK, Json(analysis)))
}
