//! Level reward & voice session domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::leveling::{CreateLevelRewardDto, LevelRewardDto, VoiceSessionDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LevelReward {
    pub id: i32,
    pub guild_id: u64,
    pub level: i32,
    pub reward_type: String,
    pub reward_value: String,
    pub reward_name: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl LevelReward {
    pub fn from_entity(entity: entity::level_reward::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            level: entity.level,
            reward_type: entity.reward_type,
            reward_value: entity.reward_value,
            reward_name: entity.reward_name,
            enabled: entity.enabled,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> LevelRewardDto {
        LevelRewardDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            level: self.level,
            reward_type: self.reward_type,
            reward_value: self.reward_value,
            reward_name: self.reward_name,
            enabled: self.enabled,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLevelRewardParam {
    pub level: i32,
    pub reward_type: String,
    pub reward_value: String,
    pub reward_name: Option<String>,
}

impl From<CreateLevelRewardDto> for CreateLevelRewardParam {
    fn from(dto: CreateLevelRewardDto) -> Self {
        Self {
            level: dto.level,
            reward_type: dto.reward_type.trim().to_lowercase(),
            reward_value: dto.reward_value.trim().to_string(),
            reward_name: dto.reward_name.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Time a member spent in one voice channel.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSession {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: String,
    pub channel_id: String,
    /// Whether the session can earn XP at all.
    pub eligible: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub xp_earned: i64,
}

impl VoiceSession {
    pub fn from_entity(entity: entity::voice_session::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: entity.user_id,
            channel_id: entity.channel_id,
            eligible: entity.eligible,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            xp_earned: entity.xp_earned,
        })
    }

    pub fn into_dto(self) -> VoiceSessionDto {
        VoiceSessionDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            user_id: self.user_id,
            channel_id: self.channel_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            xp_earned: self.xp_earned,
        }
    }

    /// Whole minutes between start and `end`.
    pub fn minutes_until(&self, end: DateTime<Utc>) -> i64 {
        (end - self.started_at).num_minutes().max(0)
    }
}
