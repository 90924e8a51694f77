//! Helpers shared by the bot's event handlers & Discord API callers.

use serenity::all::Colour;

/// Fallback embed colour, Discord blurple.
pub const DEFAULT_COLOUR: u32 = 0x5865F2;

/// Parses a stored Discord id, returning `None` for blank, malformed or zero ids.
///
/// Serenity id constructors panic on zero, so every id read from settings goes
/// through here first.
pub fn snowflake(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// Parses a `#RRGGBB` colour, falling back to [`DEFAULT_COLOUR`].
pub fn embed_colour(hex: &str) -> Colour {
    let value = u32::from_str_radix(hex.trim().trim_start_matches('#'), 16)
        .ok()
        .filter(|value| *value <= 0xFFFFFF)
        .unwrap_or(DEFAULT_COLOUR);

    Colour::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflakes() {
        assert_eq!(snowflake(" 123 "), Some(123));
        assert_eq!(snowflake("0"), None);
        assert_eq!(snowflake(""), None);
        assert_eq!(snowflake("abc"), None);
    }

    #[test]
    fn parses_embed_colours() {
        assert_eq!(embed_colour("#FF0000").0, 0xFF0000);
        assert_eq!(embed_colour("00ff00").0, 0x00FF00);
        assert_eq!(embed_colour("not a colour").0, DEFAULT_COLOUR);
    }
}
