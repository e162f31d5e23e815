use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        facility::{CreateFacilityDto, FacilityDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::facility::FacilityService,
    },
};

pub static FACILITY_TAG: &str = "facility";

/// List all facilities
#[utoipa::path(
    get,
    path = "/api/facilities",
    tag = FACILITY_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Success when listing facilities", body = Vec<FacilityDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_facilities(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let facilities = FacilityService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(facilities)))
}

/// Register a facility
#[utoipa::path(
    post,
    path = "/api/facilities",
    tag = FACILITY_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateFacilityDto,
    responses(
        (status = 201, description = "Facility created", body = FacilityDto),
        (status = 400, description = "Invalid facility", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the manager role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_facility(
    State(state): State<AppState>,
    user: AuthUser,
    Json(facility): Json<CreateFacilityDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Manager)?;

    let facility = FacilityService::new(&state.db).create(facility).await?;

    Ok((StatusCode::CREATED, Json(facility)))
}

/// Get a facility by ID
#[utoipa::path(
    get,
    path = "/api/facilities/{facility_id}",
    tag = FACILITY_TAG,
    security(("bearer_auth" = [])),
    params(("facility_id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility found", body = FacilityDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_facility(
    State(state): State<AppState>,
    user: AuthUser,
    Path(facility_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let facility = FacilityService::new(&state.db).get(facility_id).await?;

    Ok((StatusCode::OK, Json(facility)))
}
