use dream_tool::{
    model::survey::{CreateSurveyDto, FacilityData, UpdateSurveyDto},
    server::controller::survey::{create_survey, get_survey, list_survey_versions, update_survey},
};

use super::*;

fn facility_data() -> FacilityData {
    serde_json::from_value(factory::facility_data()).unwrap()
}

/// Expect 201 Created when the body names the path facility
#[tokio::test]
async fn creates_survey_for_facility() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = create_survey(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(1),
        Json(CreateSurveyDto {
            external_id: Some("kobo-42".to_string()),
            facility_id: Some(1),
            facility_data: facility_data(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["facility_id"], 1);
    assert_eq!(body["version"], 1);

    Ok(())
}

/// Expect 400 Bad Request when the body has no facility_id
#[tokio::test]
async fn rejects_survey_without_facility_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = create_survey(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(1),
        Json(CreateSurveyDto {
            external_id: Some("kobo-42".to_string()),
            facility_id: None,
            facility_data: facility_data(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().contains("facility_id"));

    Ok(())
}

/// Expect 400 Bad Request when the body names a different facility
#[tokio::test]
async fn rejects_mismatched_facility() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = create_survey(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(1),
        Json(CreateSurveyDto {
            external_id: Some("kobo-42".to_string()),
            facility_id: Some(2),
            facility_data: facility_data(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for a facility without survey
#[tokio::test]
async fn get_returns_not_found_without_survey() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = get_survey(State(test.into_app_state()), user(Role::Viewer), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an update to add a version visible in the version list
#[tokio::test]
async fn update_adds_version() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    test.survey()
        .insert_mock_survey(1, "kobo-1", factory::facility_data())
        .await?;
    let state = test.into_app_state();

    let result = update_survey(
        State(state.clone()),
        user(Role::Technician),
        Path(1),
        Json(UpdateSurveyDto {
            facility_data: FacilityData::default(),
        }),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let resp = list_survey_versions(State(state), user(Role::Viewer), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}
