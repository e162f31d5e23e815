use sea_orm::DatabaseConnection;

use crate::{
    model::facility::{CreateFacilityDto, FacilityDto},
    server::{
        data::facility::FacilityRepository,
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

pub struct FacilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacilityService<'a> {
    /// Creates a new instance of [`FacilityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a facility, requiring a non-blank name and coordinates within range
    pub async fn create(&self, facility: CreateFacilityDto) -> Result<FacilityDto, Error> {
        if facility.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        if facility
            .latitude
            .is_some_and(|lat| !(-90.0..=90.0).contains(&lat))
        {
            return Err(ValidationError::invalid("latitude", "must be between -90 and 90").into());
        }
        if facility
            .longitude
            .is_some_and(|lon| !(-180.0..=180.0).contains(&lon))
        {
            return Err(
                ValidationError::invalid("longitude", "must be between -180 and 180").into(),
            );
        }

        let facility = FacilityRepository::new(self.db).create(facility).await?;

        tracing::info!("Registered facility {} ({})", facility.id, facility.name);

        Ok(facility.into())
    }

    pub async fn get(&self, facility_id: i32) -> Result<FacilityDto, Error> {
        let facility = FacilityRepository::new(self.db)
            .get_by_id(facility_id)
            .await?
            .ok_or(NotFoundError::Facility(facility_id))?;

        Ok(facility.into())
    }

    pub async fn list(&self) -> Result<Vec<FacilityDto>, Error> {
        let facilities = FacilityRepository::new(self.db).get_all().await?;

        Ok(facilities.into_iter().map(FacilityDto::from).collect())
    }
}
