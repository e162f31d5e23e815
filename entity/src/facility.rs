use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "facility")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub facility_type: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::survey::Entity")]
    Survey,
    #[sea_orm(has_many = "super::solar_system::Entity")]
    SolarSystem,
    #[sea_orm(has_many = "super::techno_economic_analysis::Entity")]
    TechnoEconomicAnalysis,
}

impl Related<super::survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl Related<super::solar_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarSystem.def()
    }
}

impl Related<super::techno_economic_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechnoEconomicAnalysis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
