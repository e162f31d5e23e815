use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "techno_economic_analysis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub facility_id: i32,
    pub survey_id: i32,
    pub stage: AnalysisStage,
    pub costing_method: CostingMethod,
    pub battery_type: BatteryType,
    pub battery_autonomy_factor: f64,
    pub battery_depth_of_discharge: f64,
    pub inverter_efficiency: f64,
    pub daily_usage_kwh: f64,
    pub peak_hours: f64,
    pub pv_system_size_kw: f64,
    pub battery_capacity_kwh: f64,
    pub unit_costs: Json,
    pub pv_initial_cost: f64,
    pub pv_battery_cost: f64,
    pub pv_annual_maintenance: f64,
    pub pv_lifecycle_cost: f64,
    pub pv_npv: f64,
    pub pv_irr: Option<f64>,
    pub diesel_initial_cost: f64,
    pub diesel_annual_maintenance: f64,
    pub diesel_lifecycle_cost: f64,
    pub diesel_npv: f64,
    pub diesel_irr: Option<f64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::facility::Entity",
        from = "Column::FacilityId",
        to = "super::facility::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Facility,
    #[sea_orm(
        belongs_to = "super::survey::Entity",
        from = "Column::SurveyId",
        to = "super::survey::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Survey,
}

impl Related<super::facility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Facility.def()
    }
}

impl Related<super::survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
