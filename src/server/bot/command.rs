//! Slash command definitions registered when the bot connects.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub const WARN: &str = "warn";
pub const WARNINGS: &str = "warnings";
pub const RANK: &str = "rank";
pub const LEADERBOARD: &str = "leaderboard";
pub const COINFLIP: &str = "coinflip";

/// Prefix of the custom id carried by ticket panel buttons, followed by the panel id.
pub const TICKET_OPEN_PREFIX: &str = "ticket_open:";
pub const REACTION_ROLE_PREFIX: &str = "reaction_role:";

pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(WARN)
            .description("Warn a member")
            .default_member_permissions(Permissions::KICK_MEMBERS)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Member to warn")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Reason for the warning",
            )),
        CreateCommand::new(WARNINGS)
            .description("Show the warnings of a member")
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Member").required(true),
            ),
        CreateCommand::new(RANK)
            .description("Show level & XP")
            .dm_permission(false)
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "Member, defaults to yourself",
            )),
        CreateCommand::new(LEADERBOARD)
            .description("Show the XP leaderboard")
            .dm_permission(false),
        CreateCommand::new(COINFLIP)
            .description("Flip a coin, heads wins")
            .dm_permission(false),
    ]
}

/// Builds the custom id of a ticket panel's open button.
pub fn ticket_open_id(panel_id: i32) -> String {
    format!("{}{}", TICKET_OPEN_PREFIX, panel_id)
}

/// Extracts the panel id from a ticket open button's custom id.
pub fn parse_ticket_open_id(custom_id: &str) -> Option<i32> {
    custom_id.strip_prefix(TICKET_OPEN_PREFIX)?.parse().ok()
}

/// Builds the custom id of a reaction role button.
pub fn reaction_role_button_id(reaction_role_id: i32) -> String {
    format!("{}{}", REACTION_ROLE_PREFIX, reaction_role_id)
}

pub fn parse_reaction_role_button_id(custom_id: &str) -> Option<i32> {
    custom_id.strip_prefix(REACTION_ROLE_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_button_ids_round_trip() {
        assert_eq!(parse_ticket_open_id(&ticket_open_id(42)), Some(42));
        assert_eq!(parse_ticket_open_id("ticket_open:abc"), None);
        assert_eq!(parse_ticket_open_id("other:1"), None);
    }

    #[test]
    fn reaction_role_button_ids_round_trip() {
        assert_eq!(
            parse_reaction_role_button_id(&reaction_role_button_id(7)),
            Some(7)
        );
        assert_eq!(parse_reaction_role_button_id(&ticket_open_id(7)), None);
    }
}
