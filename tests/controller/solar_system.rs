use axum::extract::Query;
use chrono::Utc;
use dream_tool::{
    model::solar_system::{CreateSolarSystemDto, SolarSystemQuery, UpdateSolarSystemDto},
    server::controller::solar_system::{
        create_solar_system, delete_solar_system, get_solar_system, list_solar_systems,
        update_solar_system,
    },
};

use super::*;

/// Expect 201 Created with metrics not yet computed
#[tokio::test]
async fn manager_creates_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = create_solar_system(
        State(test.into_app_state()),
        user(Role::Manager),
        Json(CreateSolarSystemDto {
            facility_id: 1,
            name: "Clinic array".to_string(),
            capacity_kw: 10.0,
            installation_date: Utc::now().naive_utc(),
            commissioning_date: None,
            status: None,
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["performance_metrics"]["state"], "not_computed");

    Ok(())
}

/// Expect the facility filter to limit the listing
#[tokio::test]
async fn lists_with_facility_filter() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .with_mock_facility("School")
        .build()
        .await?;
    test.solar_system().insert_mock_solar_system(1).await?;
    test.solar_system().insert_mock_solar_system(2).await?;

    let result = list_solar_systems(
        State(test.into_app_state()),
        user(Role::Viewer),
        Query(SolarSystemQuery {
            facility_id: Some(1),
        }),
    )
    .await;

    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["facility_id"], 1);

    Ok(())
}

/// Expect a technician to be refused updates
#[tokio::test]
async fn technician_cannot_update() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let system = test.solar_system().insert_mock_solar_system(1).await?;

    let result = update_solar_system(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(system.id),
        Json(UpdateSolarSystemDto {
            name: Some("Renamed".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 204 No Content for an admin and 404 Not Found afterwards
#[tokio::test]
async fn admin_deletes_system() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let system = test.solar_system().insert_mock_solar_system(1).await?;
    let state = test.into_app_state();

    let result = delete_solar_system(State(state.clone()), user(Role::Admin), Path(system.id)).await;
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    let result = get_solar_system(State(state), user(Role::Viewer), Path(system.id)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect a manager to be refused deletion
#[tokio::test]
async fn manager_cannot_delete() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let system = test.solar_system().insert_mock_solar_system(1).await?;

    let result =
        delete_solar_system(State(test.into_app_state()), user(Role::Manager), Path(system.id))
            .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}
