use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        solar_system::{
            CreateSolarSystemDto, SolarSystemDto, SolarSystemQuery, UpdateSolarSystemDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::solar_system::SolarSystemService,
    },
};

pub static SOLAR_SYSTEM_TAG: &str = "solar-system";

/// Register a solar system
#[utoipa::path(
    post,
    path = "/api/solar-system",
    tag = SOLAR_SYSTEM_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateSolarSystemDto,
    responses(
        (status = 201, description = "Solar system created", body = SolarSystemDto),
        (status = 400, description = "Invalid solar system", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the manager role", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_solar_system(
    State(state): State<AppState>,
    user: AuthUser,
    Json(system): Json<CreateSolarSystemDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Manager)?;

    let system = SolarSystemService::new(&state.db).create(system).await?;

    Ok((StatusCode::CREATED, Json(system)))
}

/// List solar systems, optionally for a single facility
#[utoipa::path(
    get,
    path = "/api/solar-system",
    tag = SOLAR_SYSTEM_TAG,
    security(("bearer_auth" = [])),
    params(SolarSystemQuery),
    responses(
        (status = 200, description = "Solar systems ordered by ID", body = Vec<SolarSystemDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_solar_systems(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<SolarSystemQuery>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let systems = SolarSystemService::new(&state.db)
        .list(query.facility_id)
        .await?;

    Ok((StatusCode::OK, Json(systems)))
}

/// Get a solar system by ID
#[utoipa::path(
    get,
    path = "/api/solar-system/{system_id}",
    tag = SOLAR_SYSTEM_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "Solar system found", body = SolarSystemDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solar_system(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let system = SolarSystemService::new(&state.db).get(system_id).await?;

    Ok((StatusCode::OK, Json(system)))
}

/// Update a solar system
#[utoipa::path(
    put,
    path = "/api/solar-system/{system_id}",
    tag = SOLAR_SYSTEM_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    request_body = UpdateSolarSystemDto,
    responses(
        (status = 200, description = "Solar system updated", body = SolarSystemDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the manager role", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_solar_system(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
    Json(update): Json<UpdateSolarSystemDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Manager)?;

    let system = SolarSystemService::new(&state.db)
        .update(system_id, update)
        .await?;

    Ok((StatusCode::OK, Json(system)))
}

/// Delete a solar system and its maintenance records
#[utoipa::path(
    delete,
    path = "/api/solar-system/{system_id}",
    tag = SOLAR_SYSTEM_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 204, description = "Solar system deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the admin role", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_solar_system(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Admin)?;

    SolarSystemService::new(&state.db).delete(system_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
