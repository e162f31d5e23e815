use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::solar_system::{
        CreateSolarSystemDto, PerformanceMetrics, SolarSystemDto, UpdateSolarSystemDto,
    },
    server::{
        data::{facility::FacilityRepository, solar_system::SolarSystemRepository},
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

pub struct SolarSystemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SolarSystemService<'a> {
    /// Creates a new instance of [`SolarSystemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a system for an existing facility with no measured performance yet
    ///
    /// # Returns
    /// - `Ok(SolarSystemDto)` - The stored system
    /// - `Err(Error::ValidationError)` - Blank name or non-positive capacity
    /// - `Err(Error::NotFoundError)` - The facility does not exist
    pub async fn create(&self, system: CreateSolarSystemDto) -> Result<SolarSystemDto, Error> {
        if system.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        check_capacity(system.capacity_kw)?;

        let txn = self.db.begin().await?;

        FacilityRepository::new(&txn)
            .get_by_id(system.facility_id)
            .await?
            .ok_or(NotFoundError::Facility(system.facility_id))?;

        let performance_metrics = serde_json::to_value(PerformanceMetrics::NotComputed)?;
        let created = SolarSystemRepository::new(&txn)
            .create(system, performance_metrics)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Registered solar system {} for facility {}",
            created.id,
            created.facility_id
        );

        Ok(created.try_into()?)
    }

    pub async fn get(&self, system_id: i32) -> Result<SolarSystemDto, Error> {
        let system = SolarSystemRepository::new(self.db)
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?;

        Ok(system.try_into()?)
    }

    pub async fn list(&self, facility_id: Option<i32>) -> Result<Vec<SolarSystemDto>, Error> {
        let systems = SolarSystemRepository::new(self.db)
            .get_all(facility_id)
            .await?;

        Ok(systems
            .into_iter()
            .map(SolarSystemDto::try_from)
            .collect::<Result<_, _>>()?)
    }

    /// Applies the fields present in `update`
    pub async fn update(
        &self,
        system_id: i32,
        update: UpdateSolarSystemDto,
    ) -> Result<SolarSystemDto, Error> {
        if let Some(capacity_kw) = update.capacity_kw {
            check_capacity(capacity_kw)?;
        }
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ValidationError::invalid("name", "must not be blank").into());
        }
        let performance_metrics = update
            .performance_metrics
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?;

        let system_repo = SolarSystemRepository::new(self.db);
        let system = system_repo
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?;

        let updated = system_repo
            .update(system, update, performance_metrics)
            .await?;

        Ok(updated.try_into()?)
    }

    /// Deletes a system together with its maintenance records
    pub async fn delete(&self, system_id: i32) -> Result<(), Error> {
        let result = SolarSystemRepository::new(self.db).delete(system_id).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::SolarSystem(system_id).into());
        }

        tracing::info!("Deleted solar system {}", system_id);

        Ok(())
    }
}

fn check_capacity(capacity_kw: f64) -> Result<(), ValidationError> {
    if !capacity_kw.is_finite() || capacity_kw <= 0.0 {
        return Err(ValidationError::invalid(
            "capacity_kw",
            "must be a positive number",
        ));
    }

    Ok(())
}
