//! Guild member domain model tracking leveling and warning counters.

use chrono::{DateTime, Utc};

use crate::{
    model::leveling::MemberDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub messages: i64,
    pub warnings: i32,
    /// When the member last earned message XP, used for the cooldown.
    pub last_xp_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Converts an entity model to the member domain model.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse guild ID to u64
    pub fn from_entity(entity: entity::guild_member::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            id: entity.id,
            guild_id,
            user_id: entity.user_id,
            xp: entity.xp,
            level: entity.level,
            messages: entity.messages,
            warnings: entity.warnings,
            last_xp_at: entity.last_xp_at,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            guild_id: self.guild_id.to_string(),
            user_id: self.user_id,
            xp: self.xp,
            level: self.level,
            messages: self.messages,
            warnings: self.warnings,
        }
    }
}

/// Result of crediting XP to a member.
#[derive(Debug, Clone)]
pub struct XpGain {
    pub member: Member,
    /// Level before the XP was added.
    pub previous_level: i32,
}

impl XpGain {
    pub fn leveled_up(&self) -> bool {
        self.member.level > self.previous_level
    }
}
