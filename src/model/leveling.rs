use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Leveling & warning counters of one guild member.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberDto {
    pub guild_id: String,
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub messages: i64,
    pub warnings: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardDto {
    pub leaderboard: Vec<MemberDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LevelRewardDto {
    pub id: i32,
    pub guild_id: String,
    pub level: i32,
    /// Either `role` or `emoji`
    pub reward_type: String,
    pub reward_value: String,
    pub reward_name: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LevelRewardListDto {
    pub rewards: Vec<LevelRewardDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateLevelRewardDto {
    pub level: i32,
    pub reward_type: String,
    pub reward_value: String,
    pub reward_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VoiceSessionDto {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub channel_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub xp_earned: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VoiceSessionListDto {
    pub sessions: Vec<VoiceSessionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VoiceStatsDto {
    pub total_sessions: u64,
    pub active_sessions: u64,
}
