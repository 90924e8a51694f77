use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{leveling::MemberDto, moderation::ModLogDto};

/// Per-guild configuration document.
///
/// Every field has a default so documents stored by older versions, or created
/// before a setting existed, deserialize with the missing values filled in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct GuildSettings {
    pub language: String,
    pub prefix: String,

    pub mod_log_channel: String,
    pub mute_role: String,
    pub warn_threshold: i32,
    /// One of `mute`, `kick` or `ban`
    pub warn_action: String,

    pub welcome_enabled: bool,
    pub welcome_channel: String,
    pub welcome_message: String,
    pub goodbye_enabled: bool,
    pub goodbye_message: String,
    pub auto_roles: Vec<String>,

    pub leveling_enabled: bool,
    pub xp_per_message: i64,
    /// Seconds between two messages that both earn XP
    pub xp_cooldown: i64,
    pub level_up_channel: String,
    /// Level (as string) -> role id granted on reaching it
    pub level_roles: HashMap<String, String>,
    pub ignored_channels: Vec<String>,

    pub voice_xp_enabled: bool,
    pub voice_xp_per_minute: i64,
    pub voice_xp_min_users: i32,
    pub voice_afk_channel: String,

    pub temp_channels_enabled: bool,
    pub temp_channel_category: String,
    pub temp_channel_creator: String,

    pub ai_enabled: bool,
    pub ai_channel: String,
    pub ai_system_prompt: String,

    pub news_channel: String,
    /// Command name -> role ids allowed to use it
    pub command_permissions: HashMap<String, Vec<String>>,
    pub admin_roles: Vec<String>,
    pub mod_roles: Vec<String>,

    pub bot_status: String,
    pub bot_activity_type: String,
    pub bot_activity_text: String,
    pub bot_embed_color: String,

    pub games_enabled: bool,
    pub games_channel: String,
    pub disabled_games: Vec<String>,
    pub game_cooldown: i32,
    pub max_active_games: i32,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            language: "de".to_string(),
            prefix: "!".to_string(),
            mod_log_channel: String::new(),
            mute_role: String::new(),
            warn_threshold: 3,
            warn_action: "mute".to_string(),
            welcome_enabled: false,
            welcome_channel: String::new(),
            welcome_message: String::new(),
            goodbye_enabled: false,
            goodbye_message: String::new(),
            auto_roles: Vec::new(),
            leveling_enabled: true,
            xp_per_message: 15,
            xp_cooldown: 60,
            level_up_channel: String::new(),
            level_roles: HashMap::new(),
            ignored_channels: Vec::new(),
            voice_xp_enabled: false,
            voice_xp_per_minute: 5,
            voice_xp_min_users: 2,
            voice_afk_channel: String::new(),
            temp_channels_enabled: false,
            temp_channel_category: String::new(),
            temp_channel_creator: String::new(),
            ai_enabled: false,
            ai_channel: String::new(),
            ai_system_prompt: String::new(),
            news_channel: String::new(),
            command_permissions: HashMap::new(),
            admin_roles: Vec::new(),
            mod_roles: Vec::new(),
            bot_status: "online".to_string(),
            bot_activity_type: "playing".to_string(),
            bot_activity_text: String::new(),
            bot_embed_color: "#5865F2".to_string(),
            games_enabled: true,
            games_channel: String::new(),
            disabled_games: Vec::new(),
            game_cooldown: 30,
            max_active_games: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildConfigDto {
    pub guild_id: String,
    #[serde(flatten)]
    pub settings: GuildSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildConfigListDto {
    pub guilds: Vec<GuildConfigDto>,
}

/// Partial update of [`GuildSettings`]. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(default)]
pub struct UpdateGuildConfigDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_log_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodbye_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodbye_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leveling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_per_message: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_cooldown: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_up_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_roles: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_xp_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_xp_per_minute: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_xp_min_users: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_afk_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_channels_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_channel_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_channel_creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_activity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_activity_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_embed_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_games: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_active_games: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GuildStatsDto {
    pub total_users: u64,
    pub total_warnings: u64,
    pub total_commands: u64,
    pub total_news: u64,
    pub top_users: Vec<MemberDto>,
    pub recent_mod_actions: Vec<ModLogDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PermissionsDto {
    pub command_permissions: HashMap<String, Vec<String>>,
    pub admin_roles: Vec<String>,
    pub mod_roles: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdatePermissionDto {
    pub command: String,
    pub role_ids: Vec<String>,
}
