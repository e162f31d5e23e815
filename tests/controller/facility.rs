use dream_tool::{
    model::facility::CreateFacilityDto,
    server::{
        controller::facility::{create_facility, get_facility, list_facilities},
        error::Error,
    },
};

use super::*;

fn facility() -> CreateFacilityDto {
    CreateFacilityDto {
        name: "Rural Clinic".to_string(),
        facility_type: "health_center".to_string(),
        location: "Turkana".to_string(),
        latitude: Some(3.1),
        longitude: Some(35.6),
    }
}

/// Expect 201 Created for a manager
#[tokio::test]
async fn manager_creates_facility() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;

    let result = create_facility(
        State(test.into_app_state()),
        user(Role::Manager),
        Json(facility()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Rural Clinic");

    Ok(())
}

/// Expect 403 Forbidden for a technician creating a facility
#[tokio::test]
async fn technician_cannot_create_facility() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;

    let result = create_facility(
        State(test.into_app_state()),
        user(Role::Technician),
        Json(facility()),
    )
    .await;

    assert!(matches!(result, Err(Error::AuthError(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 OK listing facilities for a viewer
#[tokio::test]
async fn viewer_lists_facilities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Facility)
        .with_mock_facility("Clinic A")
        .with_mock_facility("Clinic B")
        .build()
        .await?;

    let result = list_facilities(State(test.into_app_state()), user(Role::Viewer)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 404 Not Found for an unknown facility
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Facility)?;

    let result = get_facility(State(test.into_app_state()), user(Role::Viewer), Path(9)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when tables are missing
#[tokio::test]
async fn list_fails_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = list_facilities(State(test.into_app_state()), user(Role::Viewer)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
