//! Facility surveys and their version history.
//!
//! A survey holds the latest [`FacilityData`] snapshot of a facility. Every submission,
//! the first included, is also kept as a numbered survey version with its equipment
//! inventory broken out into rows.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::survey::{CreateSurveyDto, FacilityData, SurveyDto, SurveyVersionDto, UpdateSurveyDto},
    server::{
        data::{
            facility::FacilityRepository,
            survey::{
                equipment::SurveyEquipmentRepository, version::SurveyVersionRepository,
                SurveyRepository,
            },
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

pub struct SurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyService<'a> {
    /// Creates a new instance of [`SurveyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new survey as version 1
    ///
    /// # Returns
    /// - `Ok(SurveyDto)` - The stored survey
    /// - `Err(Error::ValidationError)` - Missing `external_id` or `facility_id`, or the
    ///   `external_id` is already taken
    /// - `Err(Error::NotFoundError)` - The facility does not exist
    pub async fn create(&self, survey: CreateSurveyDto) -> Result<SurveyDto, Error> {
        let external_id = survey
            .external_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ValidationError::MissingField("external_id"))?;
        let facility_id = survey
            .facility_id
            .ok_or(ValidationError::MissingField("facility_id"))?;

        let txn = self.db.begin().await?;

        FacilityRepository::new(&txn)
            .get_by_id(facility_id)
            .await?
            .ok_or(NotFoundError::Facility(facility_id))?;

        let survey_repo = SurveyRepository::new(&txn);
        if survey_repo
            .find_by_external_id(&external_id)
            .await?
            .is_some()
        {
            return Err(ValidationError::DuplicateExternalId(external_id).into());
        }

        let facility_data = survey.facility_data;
        let created = survey_repo
            .create(external_id, facility_id, serde_json::to_value(&facility_data)?)
            .await?;
        let version = store_version(&txn, created.id, 1, &facility_data).await?;

        txn.commit().await?;

        tracing::info!(
            "Stored survey {} for facility {} with {} equipment items",
            created.external_id,
            facility_id,
            facility_data.equipment.len()
        );

        survey_dto(created, version.version_number)
    }

    /// Returns the latest survey of a facility
    pub async fn get_latest(&self, facility_id: i32) -> Result<SurveyDto, Error> {
        let survey = SurveyRepository::new(self.db)
            .get_latest_by_facility(facility_id)
            .await?
            .ok_or(NotFoundError::Survey(facility_id))?;
        let version = SurveyVersionRepository::new(self.db)
            .get_latest(survey.id)
            .await?
            .map_or(1, |version| version.version_number);

        survey_dto(survey, version)
    }

    /// Replaces the facility's latest survey snapshot, keeping the previous one as a
    /// version
    pub async fn update(
        &self,
        facility_id: i32,
        update: UpdateSurveyDto,
    ) -> Result<SurveyDto, Error> {
        let txn = self.db.begin().await?;

        let survey = SurveyRepository::new(&txn)
            .get_latest_by_facility(facility_id)
            .await?
            .ok_or(NotFoundError::Survey(facility_id))?;
        let version_number = SurveyVersionRepository::new(&txn)
            .get_latest(survey.id)
            .await?
            .map_or(1, |version| version.version_number + 1);

        let facility_data = update.facility_data;
        let survey = SurveyRepository::new(&txn)
            .update_facility_data(survey, serde_json::to_value(&facility_data)?)
            .await?;
        store_version(&txn, survey.id, version_number, &facility_data).await?;

        txn.commit().await?;

        tracing::info!(
            "Survey {} of facility {} updated to version {}",
            survey.external_id,
            facility_id,
            version_number
        );

        survey_dto(survey, version_number)
    }

    /// Lists every version of the facility's latest survey, oldest first
    pub async fn list_versions(&self, facility_id: i32) -> Result<Vec<SurveyVersionDto>, Error> {
        let survey = SurveyRepository::new(self.db)
            .get_latest_by_facility(facility_id)
            .await?
            .ok_or(NotFoundError::Survey(facility_id))?;

        SurveyVersionRepository::new(self.db)
            .get_all(survey.id)
            .await?
            .into_iter()
            .map(|version| {
                Ok(SurveyVersionDto {
                    id: version.id,
                    version_number: version.version_number,
                    facility_data: serde_json::from_value(version.facility_data)?,
                    created_at: version.created_at,
                })
            })
            .collect()
    }
}

async fn store_version<C: ConnectionTrait>(
    db: &C,
    survey_id: i32,
    version_number: i32,
    facility_data: &FacilityData,
) -> Result<entity::survey_version::Model, Error> {
    let version = SurveyVersionRepository::new(db)
        .create(survey_id, version_number, serde_json::to_value(facility_data)?)
        .await?;
    SurveyEquipmentRepository::new(db)
        .create_many(version.id, &facility_data.equipment)
        .await?;

    Ok(version)
}

fn survey_dto(survey: entity::survey::Model, version: i32) -> Result<SurveyDto, Error> {
    Ok(SurveyDto {
        id: survey.id,
        external_id: survey.external_id,
        facility_id: survey.facility_id,
        version,
        facility_data: serde_json::from_value(survey.facility_data)?,
        created_at: survey.created_at,
        updated_at: survey.updated_at,
    })
}
