use dream_tool::{
    model::techno_economic::{CalculationRequestDto, UnitCostOverrides},
    server::controller::techno_economic::{calculate, get_latest_analysis},
};
use entity::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};

use super::*;

fn request(costing_method: CostingMethod) -> CalculationRequestDto {
    CalculationRequestDto {
        stage: AnalysisStage::Prefeasibility,
        costing_method,
        battery_type: BatteryType::Lithium,
        battery_autonomy_factor: 1.0,
        battery_depth_of_discharge: 0.8,
        inverter_efficiency: 0.95,
        unit_costs: UnitCostOverrides::default(),
    }
}

/// Expect 201 Created and the stored analysis to be returned afterwards
#[tokio::test]
async fn calculates_and_returns_latest() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    test.survey()
        .insert_mock_survey(1, "kobo-1", factory::facility_data())
        .await?;
    let state = test.into_app_state();

    let result = calculate(
        State(state.clone()),
        user(Role::Technician),
        Path(1),
        Json(request(CostingMethod::PerWatt)),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;

    let resp = get_latest_analysis(State(state), user(Role::Viewer), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let latest = json_body(resp).await;
    assert_eq!(latest["id"], created["id"]);

    Ok(())
}

/// Expect 400 Bad Request for component-based costing at prefeasibility
#[tokio::test]
async fn rejects_costing_method_for_stage() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    test.survey()
        .insert_mock_survey(1, "kobo-1", factory::facility_data())
        .await?;

    let result = calculate(
        State(test.into_app_state()),
        user(Role::Technician),
        Path(1),
        Json(request(CostingMethod::ComponentBased)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found before any analysis ran
#[tokio::test]
async fn latest_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;

    let result = get_latest_analysis(State(test.into_app_state()), user(Role::Viewer), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
