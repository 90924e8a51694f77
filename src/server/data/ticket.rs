//! Ticket panel and ticket data repositories.
//!
//! Panels are the embeds with an "open ticket" button posted into a channel. Each panel
//! keeps a counter used to number the tickets opened from it. Tickets move through the
//! `open -> claimed -> closed` states, the transition rules are enforced by the service.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::{
    model::ticket::TicketStatsDto,
    server::{
        error::AppError,
        model::ticket::{
            CreateTicketPanelParam, CreateTicketParam, Ticket, TicketPanel, TicketStatus,
            UpdateTicketPanelParam,
        },
    },
};

/// Repository providing database operations for ticket panels.
pub struct TicketPanelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketPanelRepository<'a> {
    /// Creates a new TicketPanelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TicketPanelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the panels of a guild in creation order.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<TicketPanel>, AppError> {
        entity::prelude::TicketPanel::find()
            .filter(entity::ticket_panel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::ticket_panel::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(TicketPanel::from_entity)
            .collect()
    }

    /// Finds a panel of a guild by id.
    ///
    /// # Returns
    /// - `Ok(Some(TicketPanel))` - Panel found
    /// - `Ok(None)` - No panel with that id in the guild
    /// - `Err(AppError)` - Database error or corrupt JSON column
    pub async fn find(&self, guild_id: u64, id: i32) -> Result<Option<TicketPanel>, AppError> {
        entity::prelude::TicketPanel::find_by_id(id)
            .filter(entity::ticket_panel::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(TicketPanel::from_entity)
            .transpose()
    }

    /// Inserts a new panel with a zero ticket counter and no posted message.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Panel fields with defaults already applied
    ///
    /// # Returns
    /// - `Ok(TicketPanel)` - The created panel
    /// - `Err(AppError)` - Database or serialization error
    pub async fn create(
        &self,
        guild_id: u64,
        param: CreateTicketPanelParam,
    ) -> Result<TicketPanel, AppError> {
        let entity = entity::ticket_panel::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id),
            message_id: ActiveValue::Set(None),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            color: ActiveValue::Set(param.color),
            button_label: ActiveValue::Set(param.button_label),
            button_emoji: ActiveValue::Set(param.button_emoji),
            ticket_category: ActiveValue::Set(param.ticket_category),
            ticket_name_template: ActiveValue::Set(param.ticket_name_template),
            categories: ActiveValue::Set(serde_json::to_string(&param.categories)?),
            custom_fields: ActiveValue::Set(serde_json::to_string(&param.custom_fields)?),
            support_roles: ActiveValue::Set(serde_json::to_string(&param.support_roles)?),
            ping_roles: ActiveValue::Set(serde_json::to_string(&param.ping_roles)?),
            claim_enabled: ActiveValue::Set(param.claim_enabled),
            transcript_enabled: ActiveValue::Set(param.transcript_enabled),
            ticket_counter: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TicketPanel::from_entity(entity)
    }

    /// Applies the fields present in `param` to a panel.
    ///
    /// # Returns
    /// - `Ok(Some(TicketPanel))` - The updated panel
    /// - `Ok(None)` - No panel with that id in the guild
    /// - `Err(AppError)` - Database or serialization error
    pub async fn update(
        &self,
        guild_id: u64,
        id: i32,
        param: UpdateTicketPanelParam,
    ) -> Result<Option<TicketPanel>, AppError> {
        let Some(existing) = entity::prelude::TicketPanel::find_by_id(id)
            .filter(entity::ticket_panel::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(channel_id) = param.channel_id {
            active.channel_id = ActiveValue::Set(channel_id);
        }
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(color) = param.color {
            active.color = ActiveValue::Set(color);
        }
        if let Some(button_label) = param.button_label {
            active.button_label = ActiveValue::Set(button_label);
        }
        if let Some(button_emoji) = param.button_emoji {
            active.button_emoji = ActiveValue::Set(button_emoji);
        }
        if let Some(ticket_category) = param.ticket_category {
            active.ticket_category =
                ActiveValue::Set(Some(ticket_category).filter(|value| !value.is_empty()));
        }
        if let Some(template) = param.ticket_name_template {
            active.ticket_name_template = ActiveValue::Set(template);
        }
        if let Some(categories) = param.categories {
            active.categories = ActiveValue::Set(serde_json::to_string(&categories)?);
        }
        if let Some(custom_fields) = param.custom_fields {
            active.custom_fields = ActiveValue::Set(serde_json::to_string(&custom_fields)?);
        }
        if let Some(support_roles) = param.support_roles {
            active.support_roles = ActiveValue::Set(serde_json::to_string(&support_roles)?);
        }
        if let Some(ping_roles) = param.ping_roles {
            active.ping_roles = ActiveValue::Set(serde_json::to_string(&ping_roles)?);
        }
        if let Some(claim_enabled) = param.claim_enabled {
            active.claim_enabled = ActiveValue::Set(claim_enabled);
        }
        if let Some(transcript_enabled) = param.transcript_enabled {
            active.transcript_enabled = ActiveValue::Set(transcript_enabled);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(TicketPanel::from_entity(updated)?))
    }

    pub async fn delete(&self, guild_id: u64, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::TicketPanel::delete_many()
            .filter(entity::ticket_panel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket_panel::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the id of the Discord message the panel was posted as.
    pub async fn set_message_id(&self, id: i32, message_id: &str) -> Result<(), AppError> {
        entity::ticket_panel::ActiveModel {
            id: ActiveValue::Unchanged(id),
            message_id: ActiveValue::Set(Some(message_id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Increments the ticket counter of a panel and returns the new value.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Number for the next ticket
    /// - `Ok(None)` - Panel does not exist
    /// - `Err(AppError)` - Database error during update
    pub async fn next_ticket_number(&self, id: i32) -> Result<Option<i32>, AppError> {
        let Some(existing) = entity::prelude::TicketPanel::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let number = existing.ticket_counter + 1;
        let mut active = existing.into_active_model();
        active.ticket_counter = ActiveValue::Set(number);
        active.update(self.db).await?;

        Ok(Some(number))
    }
}

/// Repository providing database operations for tickets.
pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists tickets of a guild newest first, optionally filtered by status.
    pub async fn get_all(
        &self,
        guild_id: u64,
        status: Option<TicketStatus>,
    ) -> Result<Vec<Ticket>, AppError> {
        let mut query = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()));

        if let Some(status) = status {
            query = query.filter(entity::ticket::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .order_by_desc(entity::ticket::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }

    pub async fn find(&self, guild_id: u64, id: i32) -> Result<Option<Ticket>, AppError> {
        entity::prelude::Ticket::find_by_id(id)
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Inserts a newly opened ticket.
    pub async fn create(&self, guild_id: u64, param: CreateTicketParam) -> Result<Ticket, AppError> {
        let entity = entity::ticket::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            panel_id: ActiveValue::Set(param.panel_id),
            channel_id: ActiveValue::Set(param.channel_id),
            user_id: ActiveValue::Set(param.user_id),
            number: ActiveValue::Set(param.number),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            claimed_by: ActiveValue::Set(None),
            closed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    /// Marks a ticket as claimed by `user_id`.
    pub async fn claim(&self, id: i32, user_id: &str) -> Result<Ticket, AppError> {
        let updated = entity::ticket::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(TicketStatus::Claimed.as_str().to_string()),
            claimed_by: ActiveValue::Set(Some(user_id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ticket::from_entity(updated)
    }

    /// Marks a ticket as closed by `user_id` at `closed_at`.
    pub async fn close(
        &self,
        id: i32,
        user_id: &str,
        closed_at: DateTime<Utc>,
    ) -> Result<Ticket, AppError> {
        let updated = entity::ticket::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(TicketStatus::Closed.as_str().to_string()),
            closed_by: ActiveValue::Set(Some(user_id.to_string())),
            closed_at: ActiveValue::Set(Some(closed_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ticket::from_entity(updated)
    }

    /// Counts the tickets of a guild per status.
    pub async fn stats(&self, guild_id: u64) -> Result<TicketStatsDto, AppError> {
        let statuses: Vec<String> = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|ticket| ticket.status)
            .collect();

        let count = |status: TicketStatus| {
            statuses
                .iter()
                .filter(|value| value.as_str() == status.as_str())
                .count() as u64
        };

        Ok(TicketStatsDto {
            open: count(TicketStatus::Open),
            claimed: count(TicketStatus::Claimed),
            closed: count(TicketStatus::Closed),
            total: statuses.len() as u64,
        })
    }
}
