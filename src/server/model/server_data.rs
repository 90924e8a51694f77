//! Cached Discord server data used to populate dashboard selectors.
//!
//! The bot converts serenity structs into the sync parameters below so the
//! repository never depends on gateway types.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelType, Emoji, GuildChannel, Role};

use crate::model::server_data::{
    CategoryOptionDto, ChannelOptionDto, EmojiOptionDto, RoleOptionDto, ServerDataDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SyncRoleParam {
    pub role_id: String,
    pub name: String,
    /// `#RRGGBB`
    pub color: String,
    pub position: i16,
}

impl SyncRoleParam {
    pub fn from_role(role: &Role) -> Self {
        Self {
            role_id: role.id.get().to_string(),
            name: role.name.clone(),
            color: format!("#{:06X}", role.colour.0),
            position: role.position as i16,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncChannelParam {
    pub channel_id: String,
    pub name: String,
    /// One of `text`, `voice` or `category`
    pub kind: String,
    pub position: i32,
}

impl SyncChannelParam {
    /// Converts a guild channel, returning `None` for kinds selectors never offer.
    pub fn from_channel(channel: &GuildChannel) -> Option<Self> {
        let kind = match channel.kind {
            ChannelType::Text | ChannelType::News => "text",
            ChannelType::Voice | ChannelType::Stage => "voice",
            ChannelType::Category => "category",
            _ => return None,
        };

        Some(Self {
            channel_id: channel.id.get().to_string(),
            name: channel.name.clone(),
            kind: kind.to_string(),
            position: channel.position as i32,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncEmojiParam {
    pub emoji_id: String,
    pub name: String,
    pub animated: bool,
}

impl SyncEmojiParam {
    pub fn from_emoji(emoji: &Emoji) -> Self {
        Self {
            emoji_id: emoji.id.get().to_string(),
            name: emoji.name.clone(),
            animated: emoji.animated,
        }
    }
}

/// Full replacement set for one guild's cached data.
#[derive(Debug, Clone, Default)]
pub struct SyncServerDataParam {
    pub roles: Vec<SyncRoleParam>,
    pub channels: Vec<SyncChannelParam>,
    pub emojis: Vec<SyncEmojiParam>,
}

/// Cached snapshot as read back from the database.
#[derive(Debug, Clone, Default)]
pub struct ServerData {
    pub guild_id: u64,
    pub roles: Vec<entity::discord_guild_role::Model>,
    pub channels: Vec<entity::discord_guild_channel::Model>,
    pub emojis: Vec<entity::discord_guild_emoji::Model>,
    pub last_sync: Option<DateTime<Utc>>,
}

impl ServerData {
    /// Builds the selector DTO.
    ///
    /// Roles are ordered by position descending without `@everyone`, whose id equals
    /// the guild id. Channels are split into text/voice channels and categories.
    pub fn into_dto(self) -> ServerDataDto {
        let everyone_id = self.guild_id.to_string();

        let mut roles = self.roles;
        roles.sort_by(|a, b| b.position.cmp(&a.position));
        let roles = roles
            .into_iter()
            .filter(|r| r.role_id != everyone_id && r.name != "@everyone")
            .map(|r| RoleOptionDto {
                id: r.role_id,
                name: r.name,
                color: r.color,
            })
            .collect();

        let mut channels = self.channels;
        channels.sort_by_key(|c| c.position);

        let categories = channels
            .iter()
            .filter(|c| c.kind == "category")
            .map(|c| CategoryOptionDto {
                id: c.channel_id.clone(),
                name: c.name.clone(),
            })
            .collect();

        let channels = channels
            .into_iter()
            .filter(|c| c.kind == "text" || c.kind == "voice")
            .map(|c| ChannelOptionDto {
                id: c.channel_id,
                name: c.name,
                kind: c.kind,
            })
            .collect();

        let emojis = self
            .emojis
            .into_iter()
            .map(|e| {
                let ext = if e.animated { "gif" } else { "png" };
                EmojiOptionDto {
                    url: format!("https://cdn.discordapp.com/emojis/{}.{}", e.emoji_id, ext),
                    id: e.emoji_id,
                    name: e.name,
                }
            })
            .collect();

        ServerDataDto {
            roles,
            channels,
            categories,
            emojis,
            last_sync: self.last_sync,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_role;

    #[test]
    fn converts_role_colour_to_hex() {
        let role = create_test_role(111, "Admin", 0xFF0000, 10);
        let param = SyncRoleParam::from_role(&role);

        assert_eq!(param.role_id, "111");
        assert_eq!(param.color, "#FF0000");
        assert_eq!(param.position, 10);
    }

    #[test]
    fn builds_sorted_selector_data() {
        let role = |id: &str, name: &str, position: i16| entity::discord_guild_role::Model {
            role_id: id.to_string(),
            guild_id: "1".to_string(),
            name: name.to_string(),
            color: "#000000".to_string(),
            position,
        };
        let channel = |id: &str, kind: &str, position: i32| entity::discord_guild_channel::Model {
            channel_id: id.to_string(),
            guild_id: "1".to_string(),
            name: format!("c{}", id),
            kind: kind.to_string(),
            position,
        };

        let data = ServerData {
            guild_id: 1,
            roles: vec![role("1", "@everyone", 0), role("2", "Low", 1), role("3", "High", 5)],
            channels: vec![
                channel("10", "voice", 2),
                channel("11", "text", 1),
                channel("12", "category", 0),
            ],
            emojis: vec![entity::discord_guild_emoji::Model {
                emoji_id: "99".to_string(),
                guild_id: "1".to_string(),
                name: "party".to_string(),
                animated: true,
            }],
            last_sync: None,
        };

        let dto = data.into_dto();

        let role_ids: Vec<_> = dto.roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(role_ids, vec!["3", "2"]);

        let channel_ids: Vec<_> = dto.channels.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(channel_ids, vec!["11", "10"]);

        assert_eq!(dto.categories.len(), 1);
        assert_eq!(dto.categories[0].id, "12");
        assert_eq!(dto.emojis[0].url, "https://cdn.discordapp.com/emojis/99.gif");
    }
}
