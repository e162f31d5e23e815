use chrono::{Duration, Utc};
use dream_tool::{
    model::maintenance::{CreateMaintenanceRecordDto, UpdateMaintenanceStatusDto},
    server::controller::maintenance::{
        create_maintenance_record, get_analytics, get_schedule, list_maintenance_records,
        optimize_all_schedules, optimize_schedule, update_maintenance_status,
    },
};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

use super::*;

async fn setup() -> Result<(TestContext, i32), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let system = test.solar_system().insert_mock_solar_system(1).await?;

    Ok((test, system.id))
}

fn record() -> CreateMaintenanceRecordDto {
    CreateMaintenanceRecordDto {
        maintenance_date: Utc::now().naive_utc() + Duration::days(3),
        maintenance_type: MaintenanceType::Routine,
        maintenance_status: None,
        description: None,
        cost: 50.0,
        labor_hours: 1.0,
        downtime_hours: 0.0,
        recurrence: None,
    }
}

/// Expect a record to move through its lifecycle over the API
#[tokio::test]
async fn record_lifecycle() -> Result<(), TestError> {
    let (test, system_id) = setup().await?;
    let state = test.into_app_state();

    let resp = create_maintenance_record(
        State(state.clone()),
        user(Role::Technician),
        Path(system_id),
        Json(record()),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    assert_eq!(created["maintenance_status"], "PENDING");
    let record_id = created["id"].as_i64().unwrap() as i32;

    for status in [MaintenanceStatus::InProgress, MaintenanceStatus::Completed] {
        let resp = update_maintenance_status(
            State(state.clone()),
            user(Role::Technician),
            Path((system_id, record_id)),
            Json(UpdateMaintenanceStatusDto { status }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Completed is final
    let result = update_maintenance_status(
        State(state.clone()),
        user(Role::Technician),
        Path((system_id, record_id)),
        Json(UpdateMaintenanceStatusDto {
            status: MaintenanceStatus::InProgress,
        }),
    )
    .await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    let resp = list_maintenance_records(State(state), user(Role::Viewer), Path(system_id))
        .await
        .unwrap()
        .into_response();
    let records = json_body(resp).await;
    assert_eq!(records[0]["maintenance_status"], "COMPLETED");

    Ok(())
}

/// Expect a viewer to be refused creating records
#[tokio::test]
async fn viewer_cannot_create_record() -> Result<(), TestError> {
    let (test, system_id) = setup().await?;

    let result = create_maintenance_record(
        State(test.into_app_state()),
        user(Role::Viewer),
        Path(system_id),
        Json(record()),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

/// Expect schedule and analytics of a system with history
#[tokio::test]
async fn schedule_and_analytics() -> Result<(), TestError> {
    let (mut test, system_id) = setup().await?;
    test.maintenance()
        .insert_mock_record(
            system_id,
            MaintenanceType::Routine,
            MaintenanceStatus::Pending,
            Utc::now().naive_utc() + Duration::days(5),
        )
        .await?;
    let state = test.into_app_state();

    let resp = get_schedule(State(state.clone()), user(Role::Viewer), Path(system_id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let schedule = json_body(resp).await;
    assert_eq!(schedule["open_records"].as_array().map(Vec::len), Some(1));
    assert!(schedule["status"]["health_score"].is_u64());

    let resp = get_analytics(State(state), user(Role::Viewer), Path(system_id))
        .await
        .unwrap()
        .into_response();
    let metrics = json_body(resp).await;
    assert_eq!(metrics["total_records"], 1);
    assert_eq!(metrics["open_records"], 1);

    Ok(())
}

/// Expect optimize to schedule a record for a never-maintained system
#[tokio::test]
async fn optimize_schedules_record() -> Result<(), TestError> {
    let (test, system_id) = setup().await?;

    let resp = optimize_schedule(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(system_id),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["system_id"], system_id);
    assert_eq!(body["scheduled"]["maintenance_status"], "PENDING");

    Ok(())
}

/// Expect optimizing all systems to require the manager role
#[tokio::test]
async fn optimize_all_requires_manager() -> Result<(), TestError> {
    let (test, _) = setup().await?;
    let state = test.into_app_state();

    let result = optimize_all_schedules(State(state.clone()), user(Role::Technician)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    let resp = optimize_all_schedules(State(state), user(Role::Manager))
        .await
        .unwrap()
        .into_response();
    let body = json_body(resp).await;
    assert_eq!(body["evaluated"], 1);

    Ok(())
}

/// Expect 404 Not Found for an unknown system
#[tokio::test]
async fn schedule_returns_not_found() -> Result<(), TestError> {
    let (test, _) = setup().await?;

    let result = get_schedule(State(test.into_app_state()), user(Role::Viewer), Path(404)).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
