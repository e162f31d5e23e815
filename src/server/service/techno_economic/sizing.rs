//! PV array and battery bank sizing with stage-dependent costing.

use entity::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};

use crate::{
    model::techno_economic::{CostSource, ResolvedCost, ResolvedUnitCosts, UnitCostOverrides},
    server::error::validation::ValidationError,
};

/// System losses between panel output and usable energy, excluding the inverter.
const SYSTEM_DERATE: f64 = 0.85;

const DEFAULT_PANEL_COST_PER_WATT: f64 = 0.8;
const DEFAULT_PANEL_COST_PER_KW: f64 = 800.0;
const DEFAULT_INVERTER_COST_PER_KW: f64 = 300.0;
const DEFAULT_STRUCTURE_COST_PER_KW: f64 = 150.0;
const DEFAULT_FIXED_COSTS: f64 = 2000.0;
const DEFAULT_COST_PER_PANEL: f64 = 250.0;
const DEFAULT_PANEL_RATING_W: f64 = 400.0;
const DEFAULT_LITHIUM_COST_PER_KWH: f64 = 500.0;
const DEFAULT_LEAD_ACID_COST_PER_KWH: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SizingInput {
    /// Daily energy demand in kWh
    pub daily_usage: f64,
    pub peak_hours: f64,
    /// Days of demand the battery bank must cover
    pub battery_autonomy_factor: f64,
    pub battery_depth_of_discharge: f64,
    pub battery_type: BatteryType,
    pub inverter_efficiency: f64,
    pub stage: AnalysisStage,
    pub costing_method: CostingMethod,
    pub unit_costs: UnitCostOverrides,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SizingResult {
    pub pv_system_size_kw: f64,
    pub battery_capacity_kwh: f64,
    /// Cost of the PV array excluding batteries
    pub pv_cost: f64,
    pub battery_cost: f64,
    pub unit_costs: ResolvedUnitCosts,
}

/// Checks that the costing method is allowed at the analysis stage.
///
/// Component-based costing needs a bill of materials and is only allowed at tendering;
/// the per-watt and fixed-variable estimates are only allowed at prefeasibility.
pub fn check_stage(method: CostingMethod, stage: AnalysisStage) -> Result<(), ValidationError> {
    let allowed = match method {
        CostingMethod::ComponentBased => stage == AnalysisStage::Tendering,
        CostingMethod::PerWatt | CostingMethod::FixedVariable => {
            stage == AnalysisStage::Prefeasibility
        }
    };

    if !allowed {
        return Err(ValidationError::CostingStageMismatch { method, stage });
    }

    Ok(())
}

/// Sizes the PV array and battery bank and prices both.
///
/// # Returns
/// - `Ok(SizingResult)` - Sizes, costs, and the unit costs used to price them
/// - `Err(ValidationError)` - A parameter is out of range or the costing method is
///   not allowed at the requested stage
pub fn size_system(input: &SizingInput) -> Result<SizingResult, ValidationError> {
    check_stage(input.costing_method, input.stage)?;
    validate(input)?;

    let pv_system_size_kw =
        input.daily_usage / (input.peak_hours * SYSTEM_DERATE * input.inverter_efficiency);
    let battery_capacity_kwh =
        input.daily_usage * input.battery_autonomy_factor / input.battery_depth_of_discharge;

    let overrides = &input.unit_costs;
    let battery_cost_per_kwh = resolve(
        "battery_cost_per_kwh",
        overrides.battery_cost_per_kwh,
        match input.battery_type {
            BatteryType::Lithium => DEFAULT_LITHIUM_COST_PER_KWH,
            BatteryType::LeadAcid => DEFAULT_LEAD_ACID_COST_PER_KWH,
        },
    )?;

    let mut unit_costs = ResolvedUnitCosts {
        battery_cost_per_kwh: Some(battery_cost_per_kwh),
        ..Default::default()
    };

    let pv_cost = match input.costing_method {
        CostingMethod::PerWatt => {
            let per_watt = resolve(
                "panel_cost_per_watt",
                overrides.panel_cost_per_watt,
                DEFAULT_PANEL_COST_PER_WATT,
            )?;
            unit_costs.panel_cost_per_watt = Some(per_watt);

            pv_system_size_kw * 1000.0 * per_watt.value
        }
        CostingMethod::FixedVariable => {
            let panel = resolve(
                "panel_cost_per_kw",
                overrides.panel_cost_per_kw,
                DEFAULT_PANEL_COST_PER_KW,
            )?;
            let inverter = resolve(
                "inverter_cost_per_kw",
                overrides.inverter_cost_per_kw,
                DEFAULT_INVERTER_COST_PER_KW,
            )?;
            let structure = resolve(
                "structure_cost_per_kw",
                overrides.structure_cost_per_kw,
                DEFAULT_STRUCTURE_COST_PER_KW,
            )?;
            let fixed = resolve("fixed_costs", overrides.fixed_costs, DEFAULT_FIXED_COSTS)?;

            unit_costs.panel_cost_per_kw = Some(panel);
            unit_costs.inverter_cost_per_kw = Some(inverter);
            unit_costs.structure_cost_per_kw = Some(structure);
            unit_costs.fixed_costs = Some(fixed);

            pv_system_size_kw * (panel.value + inverter.value + structure.value) + fixed.value
        }
        CostingMethod::ComponentBased => {
            let per_panel = resolve(
                "cost_per_panel",
                overrides.cost_per_panel,
                DEFAULT_COST_PER_PANEL,
            )?;
            let inverter = resolve(
                "inverter_cost_per_kw",
                overrides.inverter_cost_per_kw,
                DEFAULT_INVERTER_COST_PER_KW,
            )?;
            let structure = resolve(
                "structure_cost_per_kw",
                overrides.structure_cost_per_kw,
                DEFAULT_STRUCTURE_COST_PER_KW,
            )?;
            let num_panels = match overrides.num_panels {
                Some(num_panels) => ResolvedCost {
                    value: f64::from(num_panels),
                    source: CostSource::Override,
                },
                None => {
                    let rating = resolve(
                        "panel_rating_w",
                        overrides.panel_rating_w,
                        DEFAULT_PANEL_RATING_W,
                    )?;
                    if rating.value <= 0.0 {
                        return Err(ValidationError::invalid(
                            "panel_rating_w",
                            "must be greater than 0",
                        ));
                    }
                    unit_costs.panel_rating_w = Some(rating);

                    ResolvedCost {
                        value: (pv_system_size_kw * 1000.0 / rating.value).ceil(),
                        source: CostSource::Derived,
                    }
                }
            };

            unit_costs.cost_per_panel = Some(per_panel);
            unit_costs.inverter_cost_per_kw = Some(inverter);
            unit_costs.structure_cost_per_kw = Some(structure);
            unit_costs.num_panels = Some(num_panels);

            num_panels.value * per_panel.value
                + pv_system_size_kw * (inverter.value + structure.value)
        }
    };

    Ok(SizingResult {
        pv_system_size_kw,
        battery_capacity_kwh,
        pv_cost,
        battery_cost: battery_capacity_kwh * battery_cost_per_kwh.value,
        unit_costs,
    })
}

fn validate(input: &SizingInput) -> Result<(), ValidationError> {
    if !input.daily_usage.is_finite() || input.daily_usage < 0.0 {
        return Err(ValidationError::invalid(
            "daily_usage",
            "must be a finite number of at least 0",
        ));
    }
    if !(input.peak_hours > 0.0) {
        return Err(ValidationError::invalid(
            "peak_hours",
            "must be greater than 0, check the facility's operational hours",
        ));
    }
    if !(input.inverter_efficiency > 0.0 && input.inverter_efficiency <= 1.0) {
        return Err(ValidationError::invalid(
            "inverter_efficiency",
            "must be greater than 0 and at most 1",
        ));
    }
    if !(input.battery_depth_of_discharge > 0.0 && input.battery_depth_of_discharge <= 1.0) {
        return Err(ValidationError::invalid(
            "battery_depth_of_discharge",
            "must be greater than 0 and at most 1",
        ));
    }
    if !(input.battery_autonomy_factor > 0.0) || !input.battery_autonomy_factor.is_finite() {
        return Err(ValidationError::invalid(
            "battery_autonomy_factor",
            "must be greater than 0",
        ));
    }

    Ok(())
}

fn resolve(
    field: &'static str,
    value: Option<f64>,
    default: f64,
) -> Result<ResolvedCost, ValidationError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => Err(ValidationError::invalid(
            field,
            "must be a finite number of at least 0",
        )),
        Some(value) => Ok(ResolvedCost {
            value,
            source: CostSource::Override,
        }),
        None => Ok(ResolvedCost {
            value: default,
            source: CostSource::Default,
        }),
    }
}
