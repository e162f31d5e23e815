use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFacilityDto {
    pub name: String,
    #[serde(default)]
    pub facility_type: String,
    #[serde(default)]
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FacilityDto {
    pub id: i32,
    pub name: String,
    pub facility_type: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::facility::Model> for FacilityDto {
    fn from(model: entity::facility::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            facility_type: model.facility_type,
            location: model.location,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
