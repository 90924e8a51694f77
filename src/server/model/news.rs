//! News domain model & parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::news::NewsDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: String,
    pub guild_id: u64,
    pub title: String,
    pub content: String,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub posted: bool,
    pub created_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            title: entity.title,
            content: entity.content,
            scheduled_for: entity.scheduled_for,
            posted: entity.posted,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            title: self.title,
            content: self.content,
            scheduled_for: self.scheduled_for,
            posted: self.posted,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a news entry, with the schedule already parsed.
#[derive(Debug, Clone)]
pub struct CreateNewsParam {
    pub title: String,
    pub content: String,
    pub scheduled_for: Option<DateTime<Utc>>,
}
