use sea_orm::DatabaseConnection;
use serenity::all::{Context, EmojiId, Reaction, ReactionType, RoleId};

use crate::server::{
    bot::util::snowflake, error::AppError, service::reaction_role::ReactionRoleService,
};

/// Handles reaction add & remove on reaction role messages
///
/// Adding a configured emoji grants its role, removing it takes the role away.
pub async fn handle_reaction(
    db: &DatabaseConnection,
    ctx: Context,
    reaction: Reaction,
    added: bool,
) -> Result<(), AppError> {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return Ok(());
    };
    if user_id == ctx.cache.current_user().id {
        return Ok(());
    }

    let Some(reaction_role) = ReactionRoleService::new(db)
        .role_for_reaction(&reaction.message_id.get().to_string(), &emoji_key(&reaction.emoji))
        .await?
    else {
        return Ok(());
    };
    let Some(role_id) = snowflake(&reaction_role.role_id) else {
        return Ok(());
    };

    let role_id = RoleId::new(role_id);
    if added {
        ctx.http
            .add_member_role(guild_id, user_id, role_id, Some("Reaction role"))
            .await?;
    } else {
        ctx.http
            .remove_member_role(guild_id, user_id, role_id, Some("Reaction role"))
            .await?;
    }

    Ok(())
}

/// Turns a stored emoji back into something Discord accepts for reactions and buttons.
pub fn stored_reaction_type(stored: &str) -> Option<ReactionType> {
    let stored = stored.trim();
    if let Some(id) = snowflake(stored) {
        return Some(ReactionType::Custom {
            animated: false,
            id: EmojiId::new(id),
            name: None,
        });
    }

    ReactionType::try_from(stored).ok()
}

/// Stored form of an emoji: the unicode text, or the id of a custom emoji.
fn emoji_key(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(text) => text.clone(),
        ReactionType::Custom { id, .. } => id.get().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_unicode_and_custom_emojis() {
        assert_eq!(emoji_key(&ReactionType::Unicode("👍".to_string())), "👍");
        assert_eq!(
            emoji_key(&ReactionType::Custom {
                animated: false,
                id: EmojiId::new(42),
                name: Some("party".to_string()),
            }),
            "42"
        );
    }

    #[test]
    fn parses_stored_emojis() {
        assert_eq!(
            stored_reaction_type("✅"),
            Some(ReactionType::Unicode("✅".to_string()))
        );
        assert!(matches!(
            stored_reaction_type("42"),
            Some(ReactionType::Custom { id, .. }) if id.get() == 42
        ));
        assert_eq!(stored_reaction_type(""), None);
    }
}
