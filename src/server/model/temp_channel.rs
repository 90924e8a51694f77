//! Temp voice channel & creator domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::temp_channel::{
        CreateTempCreatorDto, TempChannelDto, TempCreatorDto, UpdateTempCreatorDto,
    },
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Voice channel spawned by a creator and owned by the member who joined it.
#[derive(Debug, Clone, PartialEq)]
pub struct TempChannel {
    pub channel_id: String,
    pub guild_id: u64,
    pub owner_id: String,
    pub creator_id: Option<i32>,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl TempChannel {
    pub fn from_entity(entity: entity::temp_channel::Model) -> Result<Self, AppError> {
        Ok(Self {
            channel_id: entity.channel_id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            owner_id: entity.owner_id,
            creator_id: entity.creator_id,
            name: entity.name,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> TempChannelDto {
        TempChannelDto {
            channel_id: self.channel_id,
            guild_id: self.guild_id.to_string(),
            owner_id: self.owner_id,
            creator_id: self.creator_id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTempChannelParam {
    pub channel_id: String,
    pub owner_id: String,
    pub creator_id: Option<i32>,
    pub name: String,
}

/// Join-to-create channel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TempCreator {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: String,
    pub category_id: Option<String>,
    pub name_template: String,
    pub numbering_type: String,
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

impl TempCreator {
    pub fn from_entity(entity: entity::temp_creator::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: entity.channel_id,
            category_id: entity.category_id,
            name_template: entity.name_template,
            numbering_type: entity.numbering_type,
            position: entity.position,
            default_limit: entity.default_limit,
            default_bitrate: entity.default_bitrate,
            allow_rename: entity.allow_rename,
            allow_limit: entity.allow_limit,
            allow_lock: entity.allow_lock,
            allow_hide: entity.allow_hide,
            allow_kick: entity.allow_kick,
            allow_permit: entity.allow_permit,
            allow_bitrate: entity.allow_bitrate,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> TempCreatorDto {
        TempCreatorDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            channel_id: self.channel_id,
            category_id: self.category_id,
            name_template: self.name_template,
            numbering_type: self.numbering_type,
            position: self.position,
            default_limit: self.default_limit,
            default_bitrate: self.default_bitrate,
            allow_rename: self.allow_rename,
            allow_limit: self.allow_limit,
            allow_lock: self.allow_lock,
            allow_hide: self.allow_hide,
            allow_kick: self.allow_kick,
            allow_permit: self.allow_permit,
            allow_bitrate: self.allow_bitrate,
            created_at: self.created_at,
        }
    }
}

pub const DEFAULT_NAME_TEMPLATE: &str = "🔊 {user}'s channel";
pub const DEFAULT_BITRATE: i32 = 64000;

/// Parameters for creating a temp creator with every default resolved.
#[derive(Debug, Clone)]
pub struct CreateTempCreatorParam {
    pub channel_id: String,
    pub category_id: Option<String>,
    pub name_template: String,
    pub numbering_type: String,
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
}

impl From<CreateTempCreatorDto> for CreateTempCreatorParam {
    fn from(dto: CreateTempCreatorDto) -> Self {
        Self {
            channel_id: dto.channel_id.trim().to_string(),
            category_id: dto.category_id.filter(|c| !c.is_empty()),
            name_template: dto
                .name_template
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAME_TEMPLATE.to_string()),
            numbering_type: dto.numbering_type.unwrap_or_else(|| "number".to_string()),
            position: dto.position.unwrap_or_else(|| "bottom".to_string()),
            default_limit: dto.default_limit.unwrap_or(0),
            default_bitrate: dto.default_bitrate.unwrap_or(DEFAULT_BITRATE),
            allow_rename: dto.allow_rename.unwrap_or(true),
            allow_limit: dto.allow_limit.unwrap_or(true),
            allow_lock: dto.allow_lock.unwrap_or(true),
            allow_hide: dto.allow_hide.unwrap_or(true),
            allow_kick: dto.allow_kick.unwrap_or(true),
            allow_permit: dto.allow_permit.unwrap_or(true),
            allow_bitrate: dto.allow_bitrate.unwrap_or(true),
        }
    }
}

/// Partial update of a temp creator.
pub type UpdateTempCreatorParam = UpdateTempCreatorDto;
