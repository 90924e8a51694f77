//! Factories for ticket panels & tickets.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating ticket panel rows.
///
/// Defaults to an unsent panel with no categories, fields or roles.
pub struct TicketPanelFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    title: String,
    message_id: Option<String>,
    ticket_counter: i32,
}

impl<'a> TicketPanelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: next_id().to_string(),
            title: "Support".to_string(),
            message_id: None,
            ticket_counter: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    pub fn ticket_counter(mut self, ticket_counter: i32) -> Self {
        self.ticket_counter = ticket_counter;
        self
    }

    pub async fn build(self) -> Result<entity::ticket_panel::Model, DbErr> {
        entity::ticket_panel::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Open a ticket".to_string()),
            color: ActiveValue::Set("#5865F2".to_string()),
            button_label: ActiveValue::Set("Open Ticket".to_string()),
            button_emoji: ActiveValue::Set("🎫".to_string()),
            ticket_category: ActiveValue::Set(None),
            ticket_name_template: ActiveValue::Set("ticket-{number}".to_string()),
            categories: ActiveValue::Set("[]".to_string()),
            custom_fields: ActiveValue::Set("[]".to_string()),
            support_roles: ActiveValue::Set("[]".to_string()),
            ping_roles: ActiveValue::Set("[]".to_string()),
            claim_enabled: ActiveValue::Set(true),
            transcript_enabled: ActiveValue::Set(true),
            ticket_counter: ActiveValue::Set(self.ticket_counter),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for `user_id` with the given sequence number.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: &str,
    panel_id: Option<i32>,
    user_id: &str,
    number: i32,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        panel_id: ActiveValue::Set(panel_id),
        channel_id: ActiveValue::Set(next_id().to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        number: ActiveValue::Set(number),
        status: ActiveValue::Set("open".to_string()),
        claimed_by: ActiveValue::Set(None),
        closed_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        closed_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
