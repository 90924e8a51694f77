use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct TicketCategoryDto {
    pub name: String,
    pub emoji: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct TicketFieldDto {
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketPanelDto {
    pub id: i32,
    pub guild_id: String,
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
    pub ticket_counter: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketPanelListDto {
    pub panels: Vec<TicketPanelDto>,
}

/// Creation payload for a ticket panel. Only `channel_id` is required.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct CreateTicketPanelDto {
    pub channel_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub button_label: Option<String>,
    pub button_emoji: Option<String>,
    pub ticket_category: Option<String>,
    pub ticket_name_template: Option<String>,
    pub categories: Option<Vec<TicketCategoryDto>>,
    pub custom_fields: Option<Vec<TicketFieldDto>>,
    pub support_roles: Option<Vec<String>>,
    pub ping_roles: Option<Vec<String>>,
    pub claim_enabled: Option<bool>,
    pub transcript_enabled: Option<bool>,
}

/// Partial update of a ticket panel. Absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct UpdateTicketPanelDto {
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub button_label: Option<String>,
    pub button_emoji: Option<String>,
    pub ticket_category: Option<String>,
    pub ticket_name_template: Option<String>,
    pub categories: Option<Vec<TicketCategoryDto>>,
    pub custom_fields: Option<Vec<TicketFieldDto>>,
    pub support_roles: Option<Vec<String>>,
    pub ping_roles: Option<Vec<String>>,
    pub claim_enabled: Option<bool>,
    pub transcript_enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketDto {
    pub id: i32,
    pub guild_id: String,
    pub panel_id: Option<i32>,
    pub channel_id: String,
    pub user_id: String,
    pub number: i32,
    /// One of `open`, `claimed` or `closed`
    pub status: String,
    pub claimed_by: Option<String>,
    pub closed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TicketStatsDto {
    pub open: u64,
    pub claimed: u64,
    pub closed: u64,
    pub total: u64,
}
