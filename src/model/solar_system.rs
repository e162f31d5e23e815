use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::SystemStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Measured performance of a solar system.
///
/// Stored as JSON on the solar system row. Systems start out as `NotComputed` until a
/// measurement is recorded; nothing ever stores zeros as a stand-in for missing data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PerformanceMetrics {
    #[default]
    NotComputed,
    Measured {
        /// Conversion efficiency relative to nameplate (0 to 1)
        efficiency: f64,
        /// Performance ratio (0 to 1)
        performance_ratio: f64,
        energy_loss_kwh: f64,
        measured_at: NaiveDateTime,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSolarSystemDto {
    pub facility_id: i32,
    pub name: String,
    pub capacity_kw: f64,
    pub installation_date: NaiveDateTime,
    pub commissioning_date: Option<NaiveDateTime>,
    #[schema(value_type = Option<String>)]
    pub status: Option<SystemStatus>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateSolarSystemDto {
    pub name: Option<String>,
    pub capacity_kw: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub status: Option<SystemStatus>,
    pub commissioning_date: Option<NaiveDateTime>,
    pub performance_metrics: Option<PerformanceMetrics>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SolarSystemDto {
    pub id: i32,
    pub facility_id: i32,
    pub name: String,
    pub capacity_kw: f64,
    pub installation_date: NaiveDateTime,
    pub commissioning_date: Option<NaiveDateTime>,
    #[schema(value_type = String)]
    pub status: SystemStatus,
    pub last_maintenance_date: Option<NaiveDateTime>,
    pub next_maintenance_date: Option<NaiveDateTime>,
    pub performance_metrics: PerformanceMetrics,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<entity::solar_system::Model> for SolarSystemDto {
    type Error = serde_json::Error;

    fn try_from(model: entity::solar_system::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            performance_metrics: serde_json::from_value(model.performance_metrics)?,
            id: model.id,
            facility_id: model.facility_id,
            name: model.name,
            capacity_kw: model.capacity_kw,
            installation_date: model.installation_date,
            commissioning_date: model.commissioning_date,
            status: model.status,
            last_maintenance_date: model.last_maintenance_date,
            next_maintenance_date: model.next_maintenance_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SolarSystemQuery {
    /// Only return systems belonging to this facility
    pub facility_id: Option<i32>,
}
