//! Facility survey snapshot and survey API bodies.
//!
//! [`FacilityData`] is the per-facility survey snapshot stored as JSON on both the
//! survey row and every survey version. Every field carries a serde default so that
//! partially filled survey submissions still deserialize, with missing numbers read
//! as zero.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::TimeOfDay;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Primary electricity source reported by the facility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElectricitySource {
    Grid,
    Solar,
    DieselGenerator,
    Hybrid,
    None,
    #[default]
    #[serde(other)]
    Other,
}

/// Quality of the facility's digital connectivity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DigitalConnectivity {
    #[default]
    #[serde(other)]
    None,
    Low,
    Medium,
    High,
}

/// Hours per day the facility operates in daytime and at night.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OperationalHours {
    pub day: f64,
    pub night: f64,
}

/// A single piece of electrical equipment from the survey inventory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Equipment {
    pub name: String,
    /// Power rating in watts
    pub power_rating: f64,
    pub quantity: u32,
    pub hours_per_day: f64,
    pub hours_per_night: f64,
    /// Days per week the equipment is in use (0 to 7)
    pub weekly_usage: f64,
    #[schema(value_type = String, example = "morning")]
    pub time_of_day: TimeOfDay,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Infrastructure {
    pub grid_connection: bool,
    pub water_access: bool,
    pub transport_access: bool,
    pub digital_connectivity: DigitalConnectivity,
}

/// Survey snapshot of a single facility.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FacilityData {
    pub electricity_source: ElectricitySource,
    pub operational_hours: OperationalHours,
    pub equipment: Vec<Equipment>,
    pub infrastructure: Infrastructure,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSurveyDto {
    pub external_id: Option<String>,
    pub facility_id: Option<i32>,
    #[serde(default)]
    pub facility_data: FacilityData,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSurveyDto {
    pub facility_data: FacilityData,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SurveyDto {
    pub id: i32,
    pub external_id: String,
    pub facility_id: i32,
    /// Version number of the snapshot in `facility_data`
    pub version: i32,
    pub facility_data: FacilityData,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SurveyVersionDto {
    pub id: i32,
    pub version_number: i32,
    pub facility_data: FacilityData,
    pub created_at: NaiveDateTime,
}
