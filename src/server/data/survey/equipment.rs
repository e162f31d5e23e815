use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::survey::Equipment;

pub struct SurveyEquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SurveyEquipmentRepository<'a, C> {
    /// Creates a new instance of [`SurveyEquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one row per equipment entry of a survey version
    pub async fn create_many(
        &self,
        survey_version_id: i32,
        equipment: &[Equipment],
    ) -> Result<(), DbErr> {
        if equipment.is_empty() {
            return Ok(());
        }

        let rows = equipment
            .iter()
            .map(|item| entity::survey_equipment::ActiveModel {
                survey_version_id: ActiveValue::Set(survey_version_id),
                name: ActiveValue::Set(item.name.clone()),
                power_rating_w: ActiveValue::Set(item.power_rating),
                quantity: ActiveValue::Set(i32::try_from(item.quantity).unwrap_or(i32::MAX)),
                hours_per_day: ActiveValue::Set(item.hours_per_day),
                hours_per_night: ActiveValue::Set(item.hours_per_night),
                weekly_usage_days: ActiveValue::Set(item.weekly_usage),
                time_of_day: ActiveValue::Set(item.time_of_day),
                ..Default::default()
            });

        entity::prelude::SurveyEquipment::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_version(
        &self,
        survey_version_id: i32,
    ) -> Result<Vec<entity::survey_equipment::Model>, DbErr> {
        entity::prelude::SurveyEquipment::find()
            .filter(entity::survey_equipment::Column::SurveyVersionId.eq(survey_version_id))
            .order_by_asc(entity::survey_equipment::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use dream_test_utils::prelude::*;
    use entity::sea_orm_active_enums::TimeOfDay;

    use crate::{
        model::survey::Equipment, server::data::survey::equipment::SurveyEquipmentRepository,
    };

    /// Expect one row per equipment entry linked to the version
    #[tokio::test]
    async fn stores_equipment_rows() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_facility("Clinic")
            .build()
            .await?;
        let (_, version) = test
            .survey()
            .insert_mock_survey(1, "kobo-1", factory::facility_data())
            .await?;

        let equipment = vec![
            Equipment {
                name: "Fridge".to_string(),
                power_rating: 150.0,
                quantity: 2,
                hours_per_day: 24.0,
                weekly_usage: 7.0,
                ..Default::default()
            },
            Equipment {
                name: "Lights".to_string(),
                power_rating: 20.0,
                quantity: 10,
                hours_per_night: 6.0,
                weekly_usage: 7.0,
                time_of_day: TimeOfDay::Night,
                ..Default::default()
            },
        ];

        let equipment_repo = SurveyEquipmentRepository::new(&test.db);
        equipment_repo.create_many(version.id, &equipment).await?;

        let rows = equipment_repo.get_by_version(version.id).await?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Fridge");
        assert_eq!(rows[1].quantity, 10);
        assert_eq!(rows[1].time_of_day, TimeOfDay::Night);

        Ok(())
    }

    /// Expect an empty inventory to write nothing and succeed
    #[tokio::test]
    async fn accepts_empty_inventory() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let equipment_repo = SurveyEquipmentRepository::new(&test.db);
        let result = equipment_repo.create_many(1, &[]).await;

        assert!(result.is_ok());

        Ok(())
    }
}
