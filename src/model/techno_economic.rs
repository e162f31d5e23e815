use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_autonomy_factor() -> f64 {
    1.0
}

fn default_depth_of_discharge() -> f64 {
    0.8
}

fn default_inverter_efficiency() -> f64 {
    0.95
}

/// Request body for a techno-economic calculation run.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationRequestDto {
    #[schema(value_type = String, example = "prefeasibility")]
    pub stage: AnalysisStage,
    #[schema(value_type = String, example = "per_watt")]
    pub costing_method: CostingMethod,
    #[serde(default)]
    #[schema(value_type = String, example = "lithium")]
    pub battery_type: BatteryType,
    /// Days of autonomy the battery bank must cover
    #[serde(default = "default_autonomy_factor")]
    pub battery_autonomy_factor: f64,
    #[serde(default = "default_depth_of_discharge")]
    pub battery_depth_of_discharge: f64,
    #[serde(default = "default_inverter_efficiency")]
    pub inverter_efficiency: f64,
    #[serde(default)]
    pub unit_costs: UnitCostOverrides,
}

/// Optional per-unit cost overrides; any field left out uses the default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UnitCostOverrides {
    pub panel_cost_per_watt: Option<f64>,
    pub panel_cost_per_kw: Option<f64>,
    pub inverter_cost_per_kw: Option<f64>,
    pub structure_cost_per_kw: Option<f64>,
    pub fixed_costs: Option<f64>,
    pub cost_per_panel: Option<f64>,
    pub panel_rating_w: Option<f64>,
    pub num_panels: Option<u32>,
    pub battery_cost_per_kwh: Option<f64>,
}

/// Where a resolved unit cost came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    Default,
    Override,
    Derived,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedCost {
    pub value: f64,
    pub source: CostSource,
}

/// The unit costs actually used by a calculation.
///
/// Only the costs relevant to the selected costing method are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedUnitCosts {
    pub battery_cost_per_kwh: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub panel_cost_per_watt: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub panel_cost_per_kw: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inverter_cost_per_kw: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub structure_cost_per_kw: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fixed_costs: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost_per_panel: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub panel_rating_w: Option<ResolvedCost>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub num_panels: Option<ResolvedCost>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PvResultDto {
    pub system_size_kw: f64,
    pub battery_capacity_kwh: f64,
    pub initial_cost: f64,
    pub battery_cost: f64,
    pub annual_maintenance: f64,
    pub lifecycle_cost: f64,
    pub npv: f64,
    /// `null` when the cash flows have no internal rate of return
    pub irr: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DieselResultDto {
    pub initial_cost: f64,
    pub annual_maintenance: f64,
    pub lifecycle_cost: f64,
    pub npv: f64,
    /// Diesel is the baseline option and has no return stream, so this is `null`
    pub irr: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalysisDto {
    pub id: i32,
    pub facility_id: i32,
    pub survey_id: i32,
    #[schema(value_type = String)]
    pub stage: AnalysisStage,
    #[schema(value_type = String)]
    pub costing_method: CostingMethod,
    #[schema(value_type = String)]
    pub battery_type: BatteryType,
    pub battery_autonomy_factor: f64,
    pub battery_depth_of_discharge: f64,
    pub inverter_efficiency: f64,
    pub daily_usage_kwh: f64,
    pub peak_hours: f64,
    pub unit_costs: ResolvedUnitCosts,
    pub pv: PvResultDto,
    pub diesel: DieselResultDto,
    pub created_at: NaiveDateTime,
}

impl TryFrom<entity::techno_economic_analysis::Model> for AnalysisDto {
    type Error = serde_json::Error;

    fn try_from(model: entity::techno_economic_analysis::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            unit_costs: serde_json::from_value(model.unit_costs)?,
            id: model.id,
            facility_id: model.facility_id,
            survey_id: model.survey_id,
            stage: model.stage,
            costing_method: model.costing_method,
            battery_type: model.battery_type,
            battery_autonomy_factor: model.battery_autonomy_factor,
            battery_depth_of_discharge: model.battery_depth_of_discharge,
            inverter_efficiency: model.inverter_efficiency,
            daily_usage_kwh: model.daily_usage_kwh,
            peak_hours: model.peak_hours,
            pv: PvResultDto {
                system_size_kw: model.pv_system_size_kw,
                battery_capacity_kwh: model.battery_capacity_kwh,
                initial_cost: model.pv_initial_cost,
                battery_cost: model.pv_battery_cost,
                annual_maintenance: model.pv_annual_maintenance,
                lifecycle_cost: model.pv_lifecycle_cost,
                npv: model.pv_npv,
                irr: model.pv_irr,
            },
            diesel: DieselResultDto {
                initial_cost: model.diesel_initial_cost,
                annual_maintenance: model.diesel_annual_maintenance,
                lifecycle_cost: model.diesel_lifecycle_cost,
                npv: model.diesel_npv,
                irr: model.diesel_irr,
            },
            created_at: model.created_at,
        })
    }
}
