//! Option building & selection rules of the server data selector.

use crate::model::server_data::ServerDataDto;

/// What a selector offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorKind {
    Role,
    /// Text & voice channels
    Channel,
    TextChannel,
    VoiceChannel,
    Category,
    Emoji,
}

impl SelectorKind {
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Channel | Self::TextChannel | Self::VoiceChannel => "channel",
            Self::Category => "category",
            Self::Emoji => "emoji",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectorOption {
    pub id: String,
    pub name: String,
    /// Role colour or emoji image url
    pub accent: Option<String>,
}

/// Collects the options of `kind` from the cached server data.
pub fn options(data: &ServerDataDto, kind: SelectorKind) -> Vec<SelectorOption> {
    match kind {
        SelectorKind::Role => data
            .roles
            .iter()
            .map(|role| SelectorOption {
                id: role.id.clone(),
                name: role.name.clone(),
                accent: Some(role.color.clone()),
            })
            .collect(),
        SelectorKind::Channel | SelectorKind::TextChannel | SelectorKind::VoiceChannel => data
            .channels
            .iter()
            .filter(|channel| match kind {
                SelectorKind::TextChannel => channel.kind == "text",
                SelectorKind::VoiceChannel => channel.kind == "voice",
                _ => true,
            })
            .map(|channel| SelectorOption {
                id: channel.id.clone(),
                name: channel.name.clone(),
                accent: None,
            })
            .collect(),
        SelectorKind::Category => data
            .categories
            .iter()
            .map(|category| SelectorOption {
                id: category.id.clone(),
                name: category.name.clone(),
                accent: None,
            })
            .collect(),
        SelectorKind::Emoji => data
            .emojis
            .iter()
            .map(|emoji| SelectorOption {
                id: emoji.id.clone(),
                name: emoji.name.clone(),
                accent: Some(emoji.url.clone()),
            })
            .collect(),
    }
}

/// Case-insensitive match of `query` against name or id.
pub fn filter(options: &[SelectorOption], query: &str) -> Vec<SelectorOption> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return options.to_vec();
    }

    options
        .iter()
        .filter(|option| {
            option.name.to_lowercase().contains(&query) || option.id.contains(&query)
        })
        .cloned()
        .collect()
}

/// Applies a click on `id` to the current selection.
///
/// Single mode replaces the selection and clears it when the current value is
/// clicked again. Multiple mode toggles membership.
pub fn toggle(selected: &[String], id: &str, multiple: bool) -> Vec<String> {
    let already = selected.iter().any(|value| value == id);

    if multiple {
        if already {
            selected.iter().filter(|value| *value != id).cloned().collect()
        } else {
            let mut next = selected.to_vec();
            next.push(id.to_string());
            next
        }
    } else if already {
        Vec::new()
    } else {
        vec![id.to_string()]
    }
}

/// Text shown on the closed selector.
///
/// A single selection shows its name in both modes, larger selections their count.
pub fn trigger_label(selected: &[String], options: &[SelectorOption], placeholder: &str) -> String {
    match selected {
        [] => placeholder.to_string(),
        [single] => options
            .iter()
            .find(|option| &option.id == single)
            .map(|option| option.name.clone())
            .unwrap_or_else(|| single.clone()),
        many => format!("{} selected", many.len()),
    }
}

/// Selection list for a single id setting, empty when unset.
pub fn single(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

/// First selected id, or empty to clear the setting.
pub fn first(ids: Vec<String>) -> String {
    ids.into_iter().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::server_data::{CategoryOptionDto, ChannelOptionDto, RoleOptionDto};

    fn data() -> ServerDataDto {
        ServerDataDto {
            roles: vec![RoleOptionDto {
                id: "1".to_string(),
                name: "Moderator".to_string(),
                color: "#FF0000".to_string(),
            }],
            channels: vec![
                ChannelOptionDto {
                    id: "10".to_string(),
                    name: "general".to_string(),
                    kind: "text".to_string(),
                },
                ChannelOptionDto {
                    id: "11".to_string(),
                    name: "Lounge".to_string(),
                    kind: "voice".to_string(),
                },
            ],
            categories: vec![CategoryOptionDto {
                id: "20".to_string(),
                name: "Community".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn channel_kinds_filter_by_type() {
        let data = data();

        assert_eq!(options(&data, SelectorKind::Channel).len(), 2);
        assert_eq!(options(&data, SelectorKind::TextChannel)[0].id, "10");
        assert_eq!(options(&data, SelectorKind::VoiceChannel)[0].id, "11");
        assert_eq!(options(&data, SelectorKind::Category)[0].name, "Community");
    }

    #[test]
    fn search_matches_name_case_insensitive_or_id() {
        let all = options(&data(), SelectorKind::Channel);

        assert_eq!(filter(&all, "LOUNGE")[0].id, "11");
        assert_eq!(filter(&all, "10")[0].name, "general");
        assert!(filter(&all, "missing").is_empty());
        assert_eq!(filter(&all, "  ").len(), 2);
    }

    #[test]
    fn single_mode_reselect_clears() {
        let selected = toggle(&[], "1", false);
        assert_eq!(selected, vec!["1"]);
        assert_eq!(toggle(&selected, "2", false), vec!["2"]);
        assert!(toggle(&selected, "1", false).is_empty());
    }

    #[test]
    fn multiple_mode_toggles() {
        let selected = toggle(&["1".to_string()], "2", true);
        assert_eq!(selected, vec!["1", "2"]);
        assert_eq!(toggle(&selected, "1", true), vec!["2"]);
    }

    #[test]
    fn single_selection_helpers() {
        assert!(single("").is_empty());
        assert_eq!(single("5"), vec!["5"]);
        assert_eq!(first(vec![]), "");
        assert_eq!(first(vec!["7".to_string()]), "7");
    }

    #[test]
    fn trigger_label_variants() {
        let roles = options(&data(), SelectorKind::Role);

        assert_eq!(trigger_label(&[], &roles, "Pick a role"), "Pick a role");
        assert_eq!(trigger_label(&["1".to_string()], &roles, ""), "Moderator");
        assert_eq!(trigger_label(&["999".to_string()], &roles, ""), "999");
        assert_eq!(
            trigger_label(&["1".to_string(), "2".to_string()], &roles, ""),
            "2 selected"
        );
    }

    #[test]
    fn multiple_mode_names_a_lone_selection() {
        let roles = options(&data(), SelectorKind::Role);
        let selected = toggle(&[], "1", true);

        assert_eq!(trigger_label(&selected, &roles, "Pick roles"), "Moderator");
    }
}
