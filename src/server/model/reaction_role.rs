//! Reaction role domain model & parameters.

use chrono::{DateTime, Utc};

pub use crate::model::reaction_role::PENDING_MESSAGE_ID;
use crate::{
    model::reaction_role::{ReactionRoleDto, ReactionRoleEntryDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// One selectable role of a reaction role panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionRole {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: String,
    pub message_id: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub emoji: String,
    pub role_id: String,
    pub label: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl ReactionRole {
    pub fn from_entity(entity: entity::reaction_role::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: entity.channel_id,
            message_id: entity.message_id,
            title: entity.title,
            description: entity.description,
            kind: entity.kind,
            emoji: entity.emoji,
            role_id: entity.role_id,
            label: entity.label,
            color: entity.color,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReactionRoleDto {
        ReactionRoleDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            channel_id: self.channel_id,
            message_id: self.message_id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            emoji: self.emoji,
            role_id: self.role_id,
            label: self.label,
            color: self.color,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating the rows of one reaction role panel.
#[derive(Debug, Clone)]
pub struct CreateReactionRolesParam {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub color: String,
    pub roles: Vec<ReactionRoleEntryDto>,
}
