use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Maximum number of roles a single reaction role panel may offer.
pub const MAX_REACTION_ROLES: usize = 10;

/// Message id of panels that have not been posted yet.
pub const PENDING_MESSAGE_ID: &str = "pending";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReactionRoleDto {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub emoji: String,
    pub role_id: String,
    pub label: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReactionRoleListDto {
    pub reaction_roles: Vec<ReactionRoleDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReactionRoleEntryDto {
    pub emoji: String,
    pub role_id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateReactionRoleDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub channel_id: String,
    /// Either `button` or `reaction`
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub roles: Vec<ReactionRoleEntryDto>,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_kind() -> String {
    "button".to_string()
}

fn default_color() -> String {
    "#5865F2".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatedReactionRolesDto {
    pub created: usize,
    pub reaction_roles: Vec<ReactionRoleDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct UpdateReactionRoleDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
}
