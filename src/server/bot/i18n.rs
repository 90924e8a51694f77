//! German & English texts for bot messages.
//!
//! Guilds pick a language in their config. Unknown languages and keys missing from a
//! table fall back to German, unknown keys render as the key itself.

use crate::server::util::template::render;

const DE: &[(&str, &str)] = &[
    ("welcome_default", "Willkommen auf dem Server, {user}! 🎉"),
    ("goodbye_default", "Auf Wiedersehen, {user}! 👋"),
    ("level_up", "🎉 Herzlichen Glückwunsch {user}! Du hast Level {level} erreicht!"),
    ("warn_dm", "⚠️ Du wurdest auf **{server}** verwarnt!\nGrund: {reason}"),
    ("mute_dm", "🔇 Du wurdest auf **{server}** stummgeschaltet!\nDauer: {duration}\nGrund: {reason}"),
    ("kick_dm", "👢 Du wurdest von **{server}** gekickt!\nGrund: {reason}"),
    ("ban_dm", "🔨 Du wurdest von **{server}** gebannt!\nGrund: {reason}"),
    ("no_permission", "❌ Du hast keine Berechtigung für diesen Befehl!"),
    ("user_not_found", "❌ Benutzer nicht gefunden!"),
    ("error", "❌ Ein Fehler ist aufgetreten!"),
    ("leaderboard_title", "🏆 XP Rangliste"),
    ("leaderboard_empty", "Noch niemand hat XP gesammelt."),
    ("warned", "⚠️ {user} wurde verwarnt. Grund: {reason}\nVerwarnungen: {count}"),
    ("threshold_reached", "Erreichte {threshold} Verwarnungen"),
    ("no_reason", "Kein Grund angegeben"),
    ("no_warnings", "{user} hat keine Verwarnungen."),
    ("warnings_title", "Verwarnungen für {user}"),
    ("warning_entry", "Verwarnung #{number}"),
    ("warning_value", "Grund: {reason}\nZeit: {date}"),
    ("rank_title", "Rang von {user}"),
    ("messages", "Nachrichten"),
    ("progress", "Fortschritt"),
    ("modlog_warn", "⚠️ **Verwarnung**"),
    ("modlog_mute", "🔇 **Stummschaltung**"),
    ("modlog_kick", "👢 **Kick**"),
    ("modlog_ban", "🔨 **Bann**"),
    ("ai_not_configured", "❌ AI ist nicht konfiguriert. Bitte füge einen API Key hinzu."),
    ("ai_error", "❌ AI Fehler: {error}"),
    ("games_disabled", "🎲 Spiele sind auf diesem Server deaktiviert."),
    ("games_wrong_channel", "🎲 Spiele sind nur in <#{channel}> erlaubt."),
    ("games_too_many", "🎲 Es laufen bereits zu viele Spiele."),
    ("games_cooldown", "⏳ Bitte warte noch {seconds} Sekunden."),
    ("coinflip_heads", "🪙 Kopf! {user} gewinnt!"),
    ("coinflip_tails", "🪙 Zahl! {user} verliert."),
    ("ticket_created", "🎫 Dein Ticket wurde erstellt: {channel}"),
    ("reaction_role_added", "✅ Du hast jetzt die Rolle {role}."),
    ("reaction_role_removed", "➖ Die Rolle {role} wurde entfernt."),
    ("ticket_welcome", "Hallo {user}, das Support-Team meldet sich gleich bei dir."),
];

const EN: &[(&str, &str)] = &[
    ("welcome_default", "Welcome to the server, {user}! 🎉"),
    ("goodbye_default", "Goodbye, {user}! 👋"),
    ("level_up", "🎉 Congratulations {user}! You reached Level {level}!"),
    ("warn_dm", "⚠️ You have been warned on **{server}**!\nReason: {reason}"),
    ("mute_dm", "🔇 You have been muted on **{server}**!\nDuration: {duration}\nReason: {reason}"),
    ("kick_dm", "👢 You have been kicked from **{server}**!\nReason: {reason}"),
    ("ban_dm", "🔨 You have been banned from **{server}**!\nReason: {reason}"),
    ("no_permission", "❌ You don't have permission for this command!"),
    ("user_not_found", "❌ User not found!"),
    ("error", "❌ An error occurred!"),
    ("leaderboard_title", "🏆 XP Leaderboard"),
    ("leaderboard_empty", "Nobody has earned XP yet."),
    ("warned", "⚠️ {user} has been warned. Reason: {reason}\nWarnings: {count}"),
    ("threshold_reached", "Reached {threshold} warnings"),
    ("no_reason", "No reason given"),
    ("no_warnings", "{user} has no warnings."),
    ("warnings_title", "Warnings for {user}"),
    ("warning_entry", "Warning #{number}"),
    ("warning_value", "Reason: {reason}\nDate: {date}"),
    ("rank_title", "Rank of {user}"),
    ("messages", "Messages"),
    ("progress", "Progress"),
    ("modlog_warn", "⚠️ **Warning**"),
    ("modlog_mute", "🔇 **Mute**"),
    ("modlog_kick", "👢 **Kick**"),
    ("modlog_ban", "🔨 **Ban**"),
    ("ai_not_configured", "❌ AI is not configured. Please add an API key."),
    ("ai_error", "❌ AI error: {error}"),
    ("games_disabled", "🎲 Games are disabled on this server."),
    ("games_wrong_channel", "🎲 Games are only allowed in <#{channel}>."),
    ("games_too_many", "🎲 Too many games are already running."),
    ("games_cooldown", "⏳ Please wait {seconds} more seconds."),
    ("coinflip_heads", "🪙 Heads! {user} wins!"),
    ("coinflip_tails", "🪙 Tails! {user} loses."),
    ("ticket_created", "🎫 Your ticket has been created: {channel}"),
    ("reaction_role_added", "✅ You now have the role {role}."),
    ("reaction_role_removed", "➖ The role {role} was removed."),
    ("ticket_welcome", "Hello {user}, the support team will be with you shortly."),
];

fn table(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "en" => EN,
        _ => DE,
    }
}

fn lookup(entries: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, text)| *text)
}

/// Returns the raw text for `key` in `language`.
pub fn text<'a>(language: &str, key: &'a str) -> &'a str {
    lookup(table(language), key)
        .or_else(|| lookup(DE, key))
        .unwrap_or(key)
}

/// Returns the text for `key` with its `{placeholders}` filled in.
pub fn t(language: &str, key: &str, values: &[(&str, &str)]) -> String {
    render(text(language, key), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_requested_language() {
        assert_eq!(
            t("en", "level_up", &[("user", "Ann"), ("level", "3")]),
            "🎉 Congratulations Ann! You reached Level 3!"
        );
    }

    #[test]
    fn falls_back_to_german() {
        assert_eq!(text("fr", "leaderboard_title"), "🏆 XP Rangliste");
        assert_eq!(text("de", "unknown_key"), "unknown_key");
    }

    #[test]
    fn tables_define_the_same_keys() {
        for (key, _) in DE {
            assert!(lookup(EN, key).is_some(), "missing english text for {}", key);
        }
        assert_eq!(DE.len(), EN.len());
    }
}
