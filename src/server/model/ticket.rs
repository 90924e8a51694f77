//! Ticket panel & ticket domain models.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::ticket::{
        CreateTicketPanelDto, TicketCategoryDto, TicketDto, TicketFieldDto, TicketPanelDto,
        UpdateTicketPanelDto,
    },
    server::{
        error::AppError,
        util::parse::{parse_json_column, parse_u64_from_string},
    },
};

/// Panel message members use to open tickets.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPanel {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: String,
    pub message_id: Option<String>,
    pub title: String,
    pub description: String,
    pub color: String,
    pub button_label: String,
    pub button_emoji: String,
    pub ticket_category: Option<String>,
    pub ticket_name_template: String,
    pub categories: Vec<TicketCategoryDto>,
    pub custom_fields: Vec<TicketFieldDto>,
    pub support_roles: Vec<String>,
    pub ping_roles: Vec<String>,
    pub claim_enabled: bool,
    pub transcript_enabled: bool,
    /// Number given to the most recent ticket of this panel.
    pub ticket_counter: i32,
    pub created_at: DateTime<Utc>,
}

impl TicketPanel {
    /// Converts an entity model to the ticket panel domain model.
    ///
    /// # Returns
    /// - `Ok(TicketPanel)` - Panel with its JSON list columns decoded
    /// - `Err(AppError::InternalErr)` - Guild id or a JSON column is invalid
    pub fn from_entity(entity: entity::ticket_panel::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: entity.channel_id,
            message_id: entity.message_id,
            title: entity.title,
            description: entity.description,
            color: entity.color,
            button_label: entity.button_label,
            button_emoji: entity.button_emoji,
            ticket_category: entity.ticket_category,
            ticket_name_template: entity.ticket_name_template,
            categories: parse_json_column("ticket_panel", "categories", &entity.categories)?,
            custom_fields: parse_json_column("ticket_panel", "custom_fields", &entity.custom_fields)?,
            support_roles: parse_json_column("ticket_panel", "support_roles", &entity.support_roles)?,
            ping_roles: parse_json_column("ticket_panel", "ping_roles", &entity.ping_roles)?,
            claim_enabled: entity.claim_enabled,
            transcript_enabled: entity.transcript_enabled,
            ticket_counter: entity.ticket_counter,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> TicketPanelDto {
        TicketPanelDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            channel_id: self.channel_id,
            message_id: self.message_id,
            title: self.title,
            description: self.description,
            color: self.color,
            button_label: self.button_label,
            button_emoji: self.button_emoji,
            ticket_category: self.ticket_category,
            ticket_name_template: self.ticket_name_template,
            categories: self.categories,
            custom_fields: self.custom_fields,
            support_roles: self.support_roles,
            ping_roles: self.ping_roles,
            claim_enabled: self.claim_enabled,
            transcript_enabled: self.transcript_enabled,
            ticket_counter: self.ticket_counter,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a ticket panel with every default resolved.
#[derive(Debug, Clone)]
pub struct CreateTicketPanelParam {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub button_label: String,
    pub button_emoji: String,
    pub ticket_category: Option<String>,
    pub ticket_name_template: String,
    pub categories: Vec<TicketCategoryDto>,
    pub custom_fields: Vec<TicketFieldDto>,
    pub support_roles: Vec<String>,
    pub ping_roles: Vec<String>,
    pub claim_enabled: bool,
    pub transcript_enabled: bool,
}

impl From<CreateTicketPanelDto> for CreateTicketPanelParam {
    fn from(dto: CreateTicketPanelDto) -> Self {
        Self {
            channel_id: dto.channel_id.trim().to_string(),
            title: dto
                .title
                .unwrap_or_else(|| "🎫 Support Tickets".to_string()),
            description: dto
                .description
                .unwrap_or_else(|| "Click the button below to open a ticket.".to_string()),
            color: dto.color.unwrap_or_else(|| "#5865F2".to_string()),
            button_label: dto
                .button_label
                .unwrap_or_else(|| "Open Ticket".to_string()),
            button_emoji: dto.button_emoji.unwrap_or_else(|| "🎫".to_string()),
            ticket_category: dto.ticket_category.filter(|c| !c.is_empty()),
            ticket_name_template: dto
                .ticket_name_template
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "ticket-{number}".to_string()),
            categories: dto.categories.unwrap_or_default(),
            custom_fields: dto.custom_fields.unwrap_or_default(),
            support_roles: dto.support_roles.unwrap_or_default(),
            ping_roles: dto.ping_roles.unwrap_or_default(),
            claim_enabled: dto.claim_enabled.unwrap_or(true),
            transcript_enabled: dto.transcript_enabled.unwrap_or(true),
        }
    }
}

/// Partial update of a ticket panel.
pub type UpdateTicketPanelParam = UpdateTicketPanelDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Claimed,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Claimed => "claimed",
            Self::Closed => "closed",
        }
    }

    /// Parses a stored or requested status, `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "claimed" => Some(Self::Claimed),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub guild_id: u64,
    pub panel_id: Option<i32>,
    pub channel_id: String,
    pub user_id: String,
    pub number: i32,
    pub status: TicketStatus,
    pub claimed_by: Option<String>,
    pub closed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, AppError> {
        let status = TicketStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Ticket {} has unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            panel_id: entity.panel_id,
            channel_id: entity.channel_id,
            user_id: entity.user_id,
            number: entity.number,
            status,
            claimed_by: entity.claimed_by,
            closed_by: entity.closed_by,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
        })
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            panel_id: self.panel_id,
            channel_id: self.channel_id,
            user_id: self.user_id,
            number: self.number,
            status: self.status.to_string(),
            claimed_by: self.claimed_by,
            closed_by: self.closed_by,
            created_at: self.created_at,
            closed_at: self.closed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub panel_id: Option<i32>,
    pub channel_id: String,
    pub user_id: String,
    pub number: i32,
}
