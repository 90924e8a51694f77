//! Warning & moderation log domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::moderation::{ModLogDto, WarningDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: String,
    pub moderator_id: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Warning {
    pub fn from_entity(entity: entity::warning::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: entity.user_id,
            moderator_id: entity.moderator_id,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> WarningDto {
        WarningDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            user_id: self.user_id,
            moderator_id: self.moderator_id,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModLog {
    pub id: i32,
    pub guild_id: u64,
    /// e.g. `warn`, `mute`, `kick`, `ban`
    pub action: String,
    pub user_id: String,
    pub moderator_id: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl ModLog {
    pub fn from_entity(entity: entity::mod_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            action: entity.action,
            user_id: entity.user_id,
            moderator_id: entity.moderator_id,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ModLogDto {
        ModLogDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            action: self.action,
            user_id: self.user_id,
            moderator_id: self.moderator_id,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

/// Parameters shared by warnings & moderation log entries.
#[derive(Debug, Clone)]
pub struct ModerationActionParam {
    pub user_id: String,
    pub moderator_id: String,
    pub reason: String,
}
