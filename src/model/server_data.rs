use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RoleOptionDto {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ChannelOptionDto {
    pub id: String,
    pub name: String,
    /// Either `text` or `voice`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CategoryOptionDto {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EmojiOptionDto {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Cached snapshot of a guild's roles, channels & emojis used by selectors.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerDataDto {
    pub roles: Vec<RoleOptionDto>,
    pub channels: Vec<ChannelOptionDto>,
    pub categories: Vec<CategoryOptionDto>,
    pub emojis: Vec<EmojiOptionDto>,
    pub last_sync: Option<DateTime<Utc>>,
}
