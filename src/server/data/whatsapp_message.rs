use chrono::Utc;
use entity::sea_orm_active_enums::{MessageDirection, MessageStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct WhatsAppMessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WhatsAppMessageRepository<'a, C> {
    /// Creates a new instance of [`WhatsAppMessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an outbound message in `pending` state
    pub async fn create_outbound(
        &self,
        to: String,
        body: String,
    ) -> Result<entity::whatsapp_message::Model, DbErr> {
        self.create(MessageDirection::Outbound, MessageStatus::Pending, to, body, None)
            .await
    }

    /// Inserts an inbound message in `received` state
    pub async fn create_inbound(
        &self,
        from: String,
        body: String,
        external_message_id: String,
    ) -> Result<entity::whatsapp_message::Model, DbErr> {
        self.create(
            MessageDirection::Inbound,
            MessageStatus::Received,
            from,
            body,
            Some(external_message_id),
        )
        .await
    }

    async fn create(
        &self,
        direction: MessageDirection,
        status: MessageStatus,
        phone_number: String,
        body: String,
        external_message_id: Option<String>,
    ) -> Result<entity::whatsapp_message::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let message = entity::whatsapp_message::ActiveModel {
            direction: ActiveValue::Set(direction),
            phone_number: ActiveValue::Set(phone_number),
            body: ActiveValue::Set(body),
            status: ActiveValue::Set(status),
            external_message_id: ActiveValue::Set(external_message_id),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    pub async fn find_by_external_id(
        &self,
        external_message_id: &str,
    ) -> Result<Option<entity::whatsapp_message::Model>, DbErr> {
        entity::prelude::WhatsappMessage::find()
            .filter(entity::whatsapp_message::Column::ExternalMessageId.eq(external_message_id))
            .one(self.db)
            .await
    }

    pub async fn mark_sent(
        &self,
        message: entity::whatsapp_message::Model,
        external_message_id: String,
    ) -> Result<entity::whatsapp_message::Model, DbErr> {
        let mut message_am = message.into_active_model();
        message_am.status = ActiveValue::Set(MessageStatus::Sent);
        message_am.external_message_id = ActiveValue::Set(Some(external_message_id));
        message_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        message_am.update(self.db).await
    }

    pub async fn mark_failed(
        &self,
        message: entity::whatsapp_message::Model,
        error: String,
    ) -> Result<entity::whatsapp_message::Model, DbErr> {
        let mut message_am = message.into_active_model();
        message_am.status = ActiveValue::Set(MessageStatus::Failed);
        message_am.error = ActiveValue::Set(Some(error));
        message_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        message_am.update(self.db).await
    }

    /// Updates the status of the message with the given external ID
    ///
    /// Returns `Ok(None)` when no message carries that ID.
    pub async fn update_status_by_external_id(
        &self,
        external_message_id: &str,
        status: MessageStatus,
    ) -> Result<Option<entity::whatsapp_message::Model>, DbErr> {
        let message = match self.find_by_external_id(external_message_id).await? {
            Some(message) => message,
            None => return Ok(None),
        };

        let mut message_am = message.into_active_model();
        message_am.status = ActiveValue::Set(status);
        message_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let message = message_am.update(self.db).await?;

        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use dream_test_utils::prelude::*;
    use entity::sea_orm_active_enums::{MessageDirection, MessageStatus};

    use crate::server::data::whatsapp_message::WhatsAppMessageRepository;

    /// Expect outbound messages to start pending and move to sent with an external ID
    #[tokio::test]
    async fn tracks_outbound_message_lifecycle() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::WhatsappMessage)?;

        let message_repo = WhatsAppMessageRepository::new(&test.db);
        let message = message_repo
            .create_outbound("+254700000000".to_string(), "Hello".to_string())
            .await?;
        assert_eq!(message.direction, MessageDirection::Outbound);
        assert_eq!(message.status, MessageStatus::Pending);

        let message = message_repo
            .mark_sent(message, "wamid.1".to_string())
            .await?;
        assert_eq!(message.status, MessageStatus::Sent);

        let found = message_repo.find_by_external_id("wamid.1").await?;
        assert_eq!(found.map(|m| m.id), Some(message.id));

        Ok(())
    }

    /// Expect failed sends to keep the error text
    #[tokio::test]
    async fn records_failure() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::WhatsappMessage)?;

        let message_repo = WhatsAppMessageRepository::new(&test.db);
        let message = message_repo
            .create_outbound("+254700000000".to_string(), "Hello".to_string())
            .await?;
        let message = message_repo
            .mark_failed(message, "status 400".to_string())
            .await?;

        assert_eq!(message.status, MessageStatus::Failed);
        assert_eq!(message.error.as_deref(), Some("status 400"));

        Ok(())
    }

    /// Expect status updates for unknown external IDs to be ignored
    #[tokio::test]
    async fn ignores_unknown_external_id() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!(entity::prelude::WhatsappMessage)?;
        test.whatsapp()
            .insert_outbound_message("+254700000000", Some("wamid.1"), MessageStatus::Sent)
            .await?;

        let message_repo = WhatsAppMessageRepository::new(&test.db);

        let unknown = message_repo
            .update_status_by_external_id("wamid.unknown", MessageStatus::Read)
            .await?;
        assert!(unknown.is_none());

        let known = message_repo
            .update_status_by_external_id("wamid.1", MessageStatus::Delivered)
            .await?;
        assert_eq!(known.map(|m| m.status), Some(MessageStatus::Delivered));

        Ok(())
    }
}
