use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{MessageDirection, MessageStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "whatsapp_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub direction: MessageDirection,
    pub phone_number: String,
    pub body: String,
    pub status: MessageStatus,
    pub external_message_id: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
