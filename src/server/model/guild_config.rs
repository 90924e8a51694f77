//! Guild configuration domain model.
//!
//! The configuration is kept as one JSON document per guild. Reading fills absent
//! settings with their defaults and updates merge only the provided fields.

use chrono::{DateTime, Utc};

use crate::{
    model::guild::{GuildConfigDto, GuildSettings, UpdateGuildConfigDto},
    server::{
        error::AppError,
        util::parse::{parse_json_column, parse_u64_from_string},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub settings: GuildSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfig {
    /// Converts an entity model to the guild config domain model.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Config with defaults applied to missing settings
    /// - `Err(AppError::InternalErr)` - Guild id or stored document is invalid
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let settings = parse_json_column("guild_config", "data", &entity.data)?;

        Ok(Self {
            guild_id,
            settings,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            guild_id: self.guild_id.to_string(),
            settings: self.settings,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial settings update. Only the fields present are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateGuildConfigParam(pub UpdateGuildConfigDto);

impl From<UpdateGuildConfigDto> for UpdateGuildConfigParam {
    fn from(dto: UpdateGuildConfigDto) -> Self {
        Self(dto)
    }
}

impl UpdateGuildConfigParam {
    /// Merges the present fields over `settings`.
    ///
    /// Both sides are converted to JSON objects so every optional field is handled
    /// without listing them individually. Absent fields are skipped during
    /// serialization and therefore never overwrite stored values.
    pub fn apply(self, settings: GuildSettings) -> Result<GuildSettings, AppError> {
        let mut document = serde_json::to_value(settings)?;
        let patch = serde_json::to_value(self.0)?;

        if let (Some(target), serde_json::Value::Object(fields)) = (document.as_object_mut(), patch)
        {
            for (key, value) in fields {
                if !value.is_null() {
                    target.insert(key, value);
                }
            }
        }

        Ok(serde_json::from_value(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_only_present_fields() {
        let update = UpdateGuildConfigParam(UpdateGuildConfigDto {
            prefix: Some("?".to_string()),
            warn_threshold: Some(5),
            ..Default::default()
        });

        let settings = update.apply(GuildSettings::default()).unwrap();

        assert_eq!(settings.prefix, "?");
        assert_eq!(settings.warn_threshold, 5);
        assert_eq!(settings.language, "de");
        assert_eq!(settings.xp_per_message, 15);
    }

    #[test]
    fn empty_update_keeps_settings() {
        let mut current = GuildSettings::default();
        current.welcome_enabled = true;
        current.auto_roles = vec!["1".to_string()];

        let settings = UpdateGuildConfigParam::default()
            .apply(current.clone())
            .unwrap();

        assert_eq!(settings, current);
    }

    #[test]
    fn replaces_collections_wholesale() {
        let mut current = GuildSettings::default();
        current.auto_roles = vec!["1".to_string(), "2".to_string()];

        let update = UpdateGuildConfigParam(UpdateGuildConfigDto {
            auto_roles: Some(vec!["3".to_string()]),
            ..Default::default()
        });

        let settings = update.apply(current).unwrap();
        assert_eq!(settings.auto_roles, vec!["3".to_string()]);
    }

    #[test]
    fn fills_defaults_for_partial_document() {
        let entity = entity::guild_config::Model {
            guild_id: "42".to_string(),
            data: r#"{"prefix":"$","welcome_enabled":true}"#.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_server_sync: None,
        };

        let config = GuildConfig::from_entity(entity).unwrap();

        assert_eq!(config.guild_id, 42);
        assert_eq!(config.settings.prefix, "$");
        assert!(config.settings.welcome_enabled);
        assert_eq!(config.settings.warn_action, "mute");
        assert_eq!(config.settings.bot_embed_color, "#5865F2");
    }
}
