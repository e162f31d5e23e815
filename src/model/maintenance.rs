use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk classification derived from a system's health score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Recurrence interval used to place the next maintenance date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceInterval {
    Routine,
    Preventive,
    Seasonal,
    Annual,
}

impl MaintenanceInterval {
    /// Length of the interval in days.
    pub const fn days(self) -> i64 {
        match self {
            Self::Routine => 30,
            Self::Preventive => 90,
            Self::Seasonal => 180,
            Self::Annual => 365,
        }
    }
}

impl From<MaintenanceType> for MaintenanceInterval {
    fn from(maintenance_type: MaintenanceType) -> Self {
        match maintenance_type {
            MaintenanceType::Preventive => Self::Preventive,
            MaintenanceType::Seasonal => Self::Seasonal,
            MaintenanceType::Routine | MaintenanceType::Corrective | MaintenanceType::Emergency => {
                Self::Routine
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMaintenanceRecordDto {
    pub maintenance_date: NaiveDateTime,
    #[schema(value_type = String, example = "ROUTINE")]
    pub maintenance_type: MaintenanceType,
    /// Defaults to `PENDING`; historical records may be entered as `COMPLETED`
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub maintenance_status: Option<MaintenanceStatus>,
    pub description: Option<String>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub labor_hours: f64,
    #[serde(default)]
    pub downtime_hours: f64,
    /// Interval used for the record's follow-up date, defaults to the type's own interval
    pub recurrence: Option<MaintenanceInterval>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMaintenanceStatusDto {
    #[schema(value_type = String, example = "COMPLETED")]
    pub status: MaintenanceStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRecordDto {
    pub id: i32,
    pub solar_system_id: i32,
    pub maintenance_date: NaiveDateTime,
    #[schema(value_type = String)]
    pub maintenance_type: MaintenanceType,
    #[schema(value_type = String)]
    pub maintenance_status: MaintenanceStatus,
    pub description: Option<String>,
    pub cost: f64,
    pub labor_hours: f64,
    pub downtime_hours: f64,
    pub next_maintenance_date: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<entity::maintenance_record::Model> for MaintenanceRecordDto {
    fn from(model: entity::maintenance_record::Model) -> Self {
        Self {
            id: model.id,
            solar_system_id: model.solar_system_id,
            maintenance_date: model.maintenance_date,
            maintenance_type: model.maintenance_type,
            maintenance_status: model.maintenance_status,
            description: model.description,
            cost: model.cost,
            labor_hours: model.labor_hours,
            downtime_hours: model.downtime_hours,
            next_maintenance_date: model.next_maintenance_date,
            completed_at: model.completed_at,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceTypeCounts {
    pub routine: usize,
    pub corrective: usize,
    pub preventive: usize,
    pub emergency: usize,
    pub seasonal: usize,
}

/// Aggregated maintenance history of a single system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SystemMetricsDto {
    pub total_records: usize,
    pub completed_records: usize,
    pub open_records: usize,
    pub records_by_type: MaintenanceTypeCounts,
    pub total_cost: f64,
    pub average_cost: f64,
    pub total_labor_hours: f64,
    pub total_downtime_hours: f64,
    pub downtime_percentage: f64,
    pub availability: f64,
    pub efficiency: Option<f64>,
    pub performance_ratio: Option<f64>,
    pub last_maintenance_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceStatusDto {
    pub system_id: i32,
    pub health_score: u8,
    pub risk_level: RiskLevel,
    #[schema(value_type = String)]
    pub recommended_type: MaintenanceType,
    pub next_maintenance_date: NaiveDateTime,
    pub should_schedule: bool,
    pub metrics: SystemMetricsDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub status: MaintenanceStatusDto,
    pub open_records: Vec<MaintenanceRecordDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OptimizeResultDto {
    pub system_id: i32,
    /// The record created by this run, if maintenance was scheduled
    pub scheduled: Option<MaintenanceRecordDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OptimizeAllDto {
    pub evaluated: usize,
    pub results: Vec<OptimizeResultDto>,
}
