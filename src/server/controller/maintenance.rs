use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CreateMaintenanceRecordDto, MaintenanceRecordDto, OptimizeAllDto, OptimizeResultDto,
            ScheduleDto, SystemMetricsDto, UpdateMaintenanceStatusDto,
        },
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, Role},
        },
        service::maintenance::{scheduler::MaintenanceScheduler, MaintenanceService},
    },
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// Record maintenance for a solar system
#[utoipa::path(
    post,
    path = "/api/solar-system/{system_id}/maintenance",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    request_body = CreateMaintenanceRecordDto,
    responses(
        (status = 201, description = "Maintenance record created", body = MaintenanceRecordDto),
        (status = 400, description = "Invalid maintenance record", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_record(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
    Json(record): Json<CreateMaintenanceRecordDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    let record = MaintenanceService::new(&state.db)
        .create_record(system_id, record)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// List maintenance records of a solar system, most recent first
#[utoipa::path(
    get,
    path = "/api/solar-system/{system_id}/maintenance",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "Maintenance records", body = Vec<MaintenanceRecordDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_maintenance_records(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let records = MaintenanceService::new(&state.db)
        .get_records(system_id)
        .await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Move a maintenance record to a new status
#[utoipa::path(
    put,
    path = "/api/solar-system/{system_id}/maintenance/{record_id}/status",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(
        ("system_id" = i32, Path, description = "Solar system ID"),
        ("record_id" = i32, Path, description = "Maintenance record ID"),
    ),
    request_body = UpdateMaintenanceStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MaintenanceRecordDto),
        (status = 400, description = "Status transition not allowed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Solar system or record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path((system_id, record_id)): Path<(i32, i32)>,
    Json(update): Json<UpdateMaintenanceStatusDto>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    let record = MaintenanceService::new(&state.db)
        .update_record_status(system_id, record_id, update.status)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Get the maintenance status and open records of a solar system
#[utoipa::path(
    get,
    path = "/api/solar-system/{system_id}/schedule",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "Maintenance schedule", body = ScheduleDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let schedule = MaintenanceService::new(&state.db)
        .get_schedule(system_id)
        .await?;

    Ok((StatusCode::OK, Json(schedule)))
}

/// Get maintenance metrics of a solar system
#[utoipa::path(
    get,
    path = "/api/solar-system/{system_id}/analytics",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "Maintenance metrics", body = SystemMetricsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Viewer)?;

    let metrics = MaintenanceService::new(&state.db)
        .get_analytics(system_id)
        .await?;

    Ok((StatusCode::OK, Json(metrics)))
}

/// Schedule maintenance for a solar system if its assessment calls for it
#[utoipa::path(
    post,
    path = "/api/solar-system/{system_id}/schedule/optimize",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    params(("system_id" = i32, Path, description = "Solar system ID")),
    responses(
        (status = 200, description = "System assessed", body = OptimizeResultDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the technician role", body = ErrorDto),
        (status = 404, description = "Solar system not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn optimize_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Path(system_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Technician)?;

    let result = MaintenanceScheduler::new(&state.db)
        .optimize(system_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Schedule maintenance for every active solar system
#[utoipa::path(
    post,
    path = "/api/solar-system/schedule/optimize",
    tag = MAINTENANCE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active systems assessed", body = OptimizeAllDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Requires the manager role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn optimize_all_schedules(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Manager)?;

    let result = MaintenanceScheduler::new(&state.db).optimize_all().await?;

    Ok((StatusCode::OK, Json(result)))
}
