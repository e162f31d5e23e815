use sea_orm_migration::{prelude::*, schema::*};

static IDX_WHATSAPP_MESSAGE_EXTERNAL_ID: &str = "idx-whatsapp_message-external_message_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhatsappMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(WhatsappMessage::Id))
                    .col(string(WhatsappMessage::Direction))
                    .col(string(WhatsappMessage::PhoneNumber))
                    .col(text(WhatsappMessage::Body))
                    .col(string(WhatsappMessage::Status))
                    .col(string_null(WhatsappMessage::ExternalMessageId))
                    .col(text_null(WhatsappMessage::Error))
                    .col(timestamp(WhatsappMessage::CreatedAt))
                    .col(timestamp(WhatsappMessage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WHATSAPP_MESSAGE_EXTERNAL_ID)
                    .table(WhatsappMessage::Table)
                    .col(WhatsappMessage::ExternalMessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WHATSAPP_MESSAGE_EXTERNAL_ID)
                    .table(WhatsappMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WhatsappMessage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WhatsappMessage {
    Table,
    Id,
    Direction,
    PhoneNumber,
    Body,
    Status,
    ExternalMessageId,
    Error,
    CreatedAt,
    UpdatedAt,
}
