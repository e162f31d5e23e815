use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        survey::{CreateSurveyDto, SurveyDto, SurveyVersionDto, UpdateSurveyDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::survey::SurveyService,
    },
};

pub static SURVEY_TAG: &str = "survey";

/// Get the latest survey of a facility
#[utoipa::path(
    get,
    path = "/api/survey/{facility_id}",
    tag = SURVEY_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Latest survey of the facility", body = SurveyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Facility has no survey", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_survey(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let survey = SurveyService::new(&state.db).get_latest(facility_id).await?;

    Ok((StatusCode::OK, Json(survey)))
}

/// Submit a new survey for a facility
///
/// `facility_id` may be omitted from the body; when given it must match the path.
#[utoipa::path(
    post,
    path = "/api/survey/{facility_id}",
    tag = SURVEY_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    request_body = CreateSurveyDto,
    responses(
        (status = 201, description = "Survey stored as version 1", body = SurveyDto),
        (status = 400, description = "Invalid or duplicate survey", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_survey(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
    Json(survey): Json<CreateSurveyDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    if survey.facility_id.is_some_and(|id| id != facility_id) {
        return Err(ValidationError::invalid(
            "facility_id",
            format!("does not match facility {} in the path", facility_id),
        )
        .into());
    }

    let survey = SurveyService::new(&state.db).create(survey).await?;

    Ok((StatusCode::CREATED, Json(survey)))
}

/// Replace the latest survey snapshot of a facility with a new version
#[utoipa::path(
    put,
    path = "/api/survey/{facility_id}",
    tag = SURVEY_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    request_body = UpdateSurveyDto,
    responses(
        (status = 200, description = "Survey updated", body = SurveyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Facility has no survey", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_survey(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
    Json(update): Json<UpdateSurveyDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    let survey = SurveyService::new(&state.db)
        .update(facility_id, update)
        .await?;

    Ok((StatusCode::OK, Json(survey)))
}

/// List all versions of a facility's survey
#[utoipa::path(
    get,
    path = "/api/survey/{facility_id}/versions",
    tag = SURVEY_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Survey versions, oldest first", body = Vec<SurveyVersionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Facility has no survey", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_survey_versions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let versions = SurveyService::new(&state.db)
        .list_versions(facility_id)
        .await?;

    Ok((StatusCode::OK, Json(versions)))
}
