//! Custom command domain model & parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::command::{CreateCustomCommandDto, CustomCommandDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomCommand {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub response: String,
    pub created_by: String,
    pub uses: i32,
    pub created_at: DateTime<Utc>,
}

impl CustomCommand {
    pub fn from_entity(entity: entity::custom_command::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            name: entity.name,
            response: entity.response,
            created_by: entity.created_by,
            uses: entity.uses,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CustomCommandDto {
        CustomCommandDto {
            id: self.id,
            guild_id: self.guild_id.to_string(),
            name: self.name,
            response: self.response,
            created_by: self.created_by,
            uses: self.uses,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or replacing a custom command.
#[derive(Debug, Clone)]
pub struct UpsertCustomCommandParam {
    /// Normalized command name, see [`normalize_command_name`].
    pub name: String,
    pub response: String,
    pub created_by: String,
}

impl From<CreateCustomCommandDto> for UpsertCustomCommandParam {
    fn from(dto: CreateCustomCommandDto) -> Self {
        Self {
            name: normalize_command_name(&dto.name),
            response: dto.response.trim().to_string(),
            created_by: "dashboard".to_string(),
        }
    }
}

/// Trims and lower-cases a command name, dropping a leading prefix character.
pub fn normalize_command_name(name: &str) -> String {
    let trimmed = name.trim();
    let without_prefix = trimmed
        .strip_prefix(|c: char| !c.is_alphanumeric())
        .unwrap_or(trimmed);

    without_prefix.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names() {
        assert_eq!(normalize_command_name("  Hello "), "hello");
        assert_eq!(normalize_command_name("!Rules"), "rules");
        assert_eq!(normalize_command_name("?faq"), "faq");
        assert_eq!(normalize_command_name("!"), "");
    }
}
