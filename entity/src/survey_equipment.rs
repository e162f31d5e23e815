use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::TimeOfDay;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub survey_version_id: i32,
    pub name: String,
    pub power_rating_w: f64,
    pub quantity: i32,
    pub hours_per_day: f64,
    pub hours_per_night: f64,
    pub weekly_usage_days: f64,
    pub time_of_day: TimeOfDay,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey_version::Entity",
        from = "Column::SurveyVersionId",
        to = "super::survey_version::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SurveyVersion,
}

impl Related<super::survey_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SurveyVersion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
