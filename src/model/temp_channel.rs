use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TempChannelDto {
    pub channel_id: String,
    pub guild_id: String,
    pub owner_id: String,
    pub creator_id: Option<i32>,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TempChannelListDto {
    pub channels: Vec<TempChannelDto>,
}

/// Join-to-create voice channel and the settings of the channels it spawns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TempCreatorDto {
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    pub category_id: Option<String>,
    pub name_template: String,
    /// One of `number`, `letter`, `superscript`, `subscript` or `roman`
    pub numbering_type: String,
    /// Either `top` or `bottom`
    pub position: String,
    pub default_limit: i32,
    pub default_bitrate: i32,
    pub allow_rename: bool,
    pub allow_limit: bool,
    pub allow_lock: bool,
    pub allow_hide: bool,
    pub allow_kick: bool,
    pub allow_permit: bool,
    pub allow_bitrate: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TempCreatorListDto {
    pub creators: Vec<TempCreatorDto>,
}

/// Creation payload for a temp creator. Only `channel_id` is required.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct CreateTempCreatorDto {
    pub channel_id: String,
    pub category_id: Option<String>,
    pub name_template: Option<String>,
    pub numbering_type: Option<String>,
    pub position: Option<String>,
    pub default_limit: Option<i32>,
    pub default_bitrate: Option<i32>,
    pub allow_rename: Option<bool>,
    pub allow_limit: Option<bool>,
    pub allow_lock: Option<bool>,
    pub allow_hide: Option<bool>,
    pub allow_kick: Option<bool>,
    pub allow_permit: Option<bool>,
    pub allow_bitrate: Option<bool>,
}

/// Partial update of a temp creator. Absent fields are left untouched.
///
/// `category_id` set to an empty string clears the category.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct UpdateTempCreatorDto {
    pub channel_id: Option<String>,
    pub category_id: Option<String>,
    pub name_template: Option<String>,
    pub numbering_type: Option<String>,
    pub position: Option<String>,
    pub default_limit: Option<i32>,
    pub default_bitrate: Option<i32>,
    pub allow_rename: Option<bool>,
    pub allow_limit: Option<bool>,
    pub allow_lock: Option<bool>,
    pub allow_hide: Option<bool>,
    pub allow_kick: Option<bool>,
    pub allow_permit: Option<bool>,
    pub allow_bitrate: Option<bool>,
}
