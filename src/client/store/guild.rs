use crate::client::store::storage::{self, GUILD_KEY};

/// Guild every feature page operates on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuildState {
    pub guild_id: Option<u64>,
}

impl GuildState {
    pub fn from_storage() -> Self {
        Self {
            guild_id: storage::get(GUILD_KEY).and_then(|value| parse_guild_id(&value)),
        }
    }

    /// Selects a guild, or clears the selection when `input` is not a snowflake.
    pub fn select(&mut self, input: &str) {
        self.guild_id = parse_guild_id(input);
        match self.guild_id {
            Some(id) => storage::set(GUILD_KEY, &id.to_string()),
            None => storage::remove(GUILD_KEY),
        }
    }
}

/// Parses a Discord guild id typed by the user.
pub fn parse_guild_id(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflakes_only() {
        assert_eq!(parse_guild_id(" 123456789012345678 "), Some(123456789012345678));
        assert_eq!(parse_guild_id(""), None);
        assert_eq!(parse_guild_id("0"), None);
        assert_eq!(parse_guild_id("12ab"), None);
        assert_eq!(parse_guild_id("-5"), None);
    }
}
