use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub solar_system_id: i32,
    pub maintenance_date: DateTime,
    pub maintenance_type: MaintenanceType,
    pub maintenance_status: MaintenanceStatus,
    pub description: Option<String>,
    pub cost: f64,
    pub labor_hours: f64,
    pub downtime_hours: f64,
    pub next_maintenance_date: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::solar_system::Entity",
        from = "Column::SolarSystemId",
        to = "super::solar_system::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SolarSystem,
}

impl Related<super::solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
