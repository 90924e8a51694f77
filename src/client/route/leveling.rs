use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, ConfirmationModal, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{bump, edit_settings, use_guild_settings, use_refetch},
        model::selector::{first, single, SelectorKind},
        store::toast::Toaster,
    },
    model::{
        guild::UpdateGuildConfigDto,
        leveling::{CreateLevelRewardDto, LeaderboardDto, LevelRewardListDto, VoiceStatsDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api,
    hook::{save_settings, use_fetch},
};

const LEADERBOARD_SIZE: u64 = 10;

/// Builds the reward payload, or explains what is missing.
pub fn build_reward(
    level: &str,
    reward_type: &str,
    reward_value: &str,
    reward_name: &str,
) -> Result<CreateLevelRewardDto, String> {
    let level = level
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|level| *level >= 1)
        .ok_or_else(|| "Level must be a positive number".to_string())?;

    if reward_value.trim().is_empty() {
        return Err(match reward_type {
            "emoji" => "Select an emoji".to_string(),
            _ => "Select a role".to_string(),
        });
    }

    Ok(CreateLevelRewardDto {
        level,
        reward_type: reward_type.to_string(),
        reward_value: reward_value.trim().to_string(),
        reward_name: Some(reward_name.trim().to_string()).filter(|name| !name.is_empty()),
    })
}

#[component]
pub fn Leveling() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Leveling | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Leveling" }
            match guild_id {
                Some(guild_id) => rsx! {
                    LevelingSettings { guild_id }
                    Rewards { guild_id }
                    div {
                        class: "grid gap-6 lg:grid-cols-2",
                        Leaderboard { guild_id }
                        VoiceStats { guild_id }
                    }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn LevelingSettings(guild_id: u64) -> Element {
    let settings = use_guild_settings(guild_id);
    let toaster = use_context::<Toaster>();

    let Some(current) = settings() else {
        return rsx! { span { class: "loading loading-spinner" } };
    };

    let save = move |_: MouseEvent| {
        let Some(current) = settings() else {
            return;
        };
        let update = UpdateGuildConfigDto {
            leveling_enabled: Some(current.leveling_enabled),
            xp_per_message: Some(current.xp_per_message),
            xp_cooldown: Some(current.xp_cooldown),
            level_up_channel: Some(current.level_up_channel),
            voice_xp_enabled: Some(current.voice_xp_enabled),
            voice_xp_per_minute: Some(current.voice_xp_per_minute),
            voice_xp_min_users: Some(current.voice_xp_min_users),
            voice_afk_channel: Some(current.voice_afk_channel),
            ..Default::default()
        };

        #[cfg(feature = "web")]
        spawn(save_settings(guild_id, update, settings, toaster));
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body grid gap-4 md:grid-cols-2",
                h2 { class: "card-title md:col-span-2", "Settings" }
                label {
                    class: "label cursor-pointer justify-start gap-3 md:col-span-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.leveling_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.leveling_enabled = e.checked()),
                    }
                    span { "Message XP" }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "XP per message" }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{current.xp_per_message}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i64>() {
                                edit_settings(settings, |s| s.xp_per_message = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Cooldown (seconds)" }
                    input {
                        r#type: "number",
                        min: "0",
                        class: "input input-bordered",
                        value: "{current.xp_cooldown}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i64>() {
                                edit_settings(settings, |s| s.xp_cooldown = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Level up channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        placeholder: "Channel of the message",
                        selected: single(&current.level_up_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.level_up_channel = first(ids)),
                    }
                }
                div { class: "divider md:col-span-2", "Voice" }
                label {
                    class: "label cursor-pointer justify-start gap-3 md:col-span-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.voice_xp_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.voice_xp_enabled = e.checked()),
                    }
                    span { "Voice XP" }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "XP per minute" }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{current.voice_xp_per_minute}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i64>() {
                                edit_settings(settings, |s| s.voice_xp_per_minute = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Minimum users in channel" }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{current.voice_xp_min_users}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                edit_settings(settings, |s| s.voice_xp_min_users = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "AFK channel (no XP)" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::VoiceChannel,
                        placeholder: "None",
                        selected: single(&current.voice_afk_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.voice_afk_channel = first(ids)),
                    }
                }
                div {
                    class: "md:col-span-2 flex justify-end",
                    button { class: "btn btn-primary", onclick: save, "Save" }
                }
            }
        }
    }
}

#[component]
fn Rewards(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let rewards = use_signal(|| None::<LevelRewardListDto>);
    let mut level = use_signal(|| "5".to_string());
    let mut reward_type = use_signal(|| "role".to_string());
    let mut reward_value = use_signal(String::new);
    let mut reward_name = use_signal(String::new);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<i32>);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, rewards, move || api::leveling::get_rewards(guild_id));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match build_reward(&level(), &reward_type(), &reward_value(), &reward_name()) {
            Ok(payload) => payload,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match api::leveling::create_reward(guild_id, payload).await {
                Ok(reward) => {
                    toaster.success(format!("Reward added for level {}", reward.level));
                    reward_value.set(String::new());
                    reward_name.set(String::new());
                    bump(refetch);
                }
                Err(err) => toaster.error(err.message),
            }
            processing.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let value_kind = if reward_type() == "emoji" {
        SelectorKind::Emoji
    } else {
        SelectorKind::Role
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Level rewards" }
                form {
                    class: "grid gap-3 md:grid-cols-[6rem_8rem_1fr_1fr_auto] items-end",
                    onsubmit: submit,
                    label {
                        class: "flex flex-col gap-1",
                        span { class: "label-text", "Level" }
                        input {
                            r#type: "number",
                            min: "1",
                            class: "input input-bordered",
                            value: "{level}",
                            oninput: move |e| level.set(e.value()),
                        }
                    }
                    label {
                        class: "flex flex-col gap-1",
                        span { class: "label-text", "Type" }
                        select {
                            class: "select select-bordered",
                            value: "{reward_type}",
                            onchange: move |e| {
                                reward_type.set(e.value());
                                reward_value.set(String::new());
                            },
                            option { value: "role", "Role" }
                            option { value: "emoji", "Emoji" }
                        }
                    }
                    label {
                        class: "flex flex-col gap-1",
                        span { class: "label-text", "Reward" }
                        ServerDataSelector {
                            guild_id,
                            kind: value_kind,
                            selected: single(&reward_value()),
                            on_change: move |ids: Vec<String>| reward_value.set(first(ids)),
                        }
                    }
                    label {
                        class: "flex flex-col gap-1",
                        span { class: "label-text", "Name" }
                        input {
                            class: "input input-bordered",
                            placeholder: "Optional",
                            value: "{reward_name}",
                            oninput: move |e| reward_name.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: processing(),
                        "Add"
                    }
                }
                match rewards() {
                    Some(list) if !list.rewards.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Level" } th { "Type" } th { "Reward" } th { "Enabled" } th {} } }
                            tbody {
                                for reward in list.rewards {
                                    {
                                        let id = reward.id;
                                        let enabled = reward.enabled;
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td { "{reward.level}" }
                                                td { "{reward.reward_type}" }
                                                td { {reward.reward_name.clone().unwrap_or_else(|| reward.reward_value.clone())} }
                                                td {
                                                    input {
                                                        r#type: "checkbox",
                                                        class: "toggle toggle-sm",
                                                        checked: enabled,
                                                        onchange: move |e| {
                                                            let enabled = e.checked();

                                                            #[cfg(feature = "web")]
                                                            spawn(async move {
                                                                if let Err(err) = api::leveling::toggle_reward(guild_id, id, enabled).await {
                                                                    toaster.error(err.message);
                                                                }
                                                                bump(refetch);
                                                            });

                                                            #[cfg(not(feature = "web"))]
                                                            let _ = enabled;
                                                        },
                                                    }
                                                }
                                                td {
                                                    class: "text-right",
                                                    button {
                                                        class: "btn btn-error btn-xs",
                                                        onclick: move |_| {
                                                            to_delete.set(Some(id));
                                                            show_delete.set(true);
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "No rewards yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete reward",
            message: "Members keep rewards they already received.",
            is_processing: processing(),
            on_confirm: move |_| {
                let Some(id) = to_delete() else {
                    return;
                };
                processing.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::leveling::delete_reward(guild_id, id).await {
                        Ok(()) => toaster.success("Reward deleted"),
                        Err(err) => toaster.error(err.message),
                    }
                    processing.set(false);
                    show_delete.set(false);
                    bump(refetch);
                });

                #[cfg(not(feature = "web"))]
                let _ = id;
            },
        }
    }
}

#[component]
fn Leaderboard(guild_id: u64) -> Element {
    let leaderboard = use_signal(|| None::<LeaderboardDto>);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), leaderboard, move || {
        api::leveling::get_leaderboard(guild_id, LEADERBOARD_SIZE)
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Leaderboard" }
                match leaderboard() {
                    Some(board) if !board.leaderboard.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "#" } th { "User" } th { "Level" } th { "XP" } th { "Messages" } } }
                            tbody {
                                for (rank, member) in board.leaderboard.into_iter().enumerate() {
                                    tr {
                                        key: "{member.user_id}",
                                        td { "{rank + 1}" }
                                        td { "{member.user_id}" }
                                        td { "{member.level}" }
                                        td { "{member.xp}" }
                                        td { "{member.messages}" }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "Nobody earned XP yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
    }
}

#[component]
fn VoiceStats(guild_id: u64) -> Element {
    let stats = use_signal(|| None::<VoiceStatsDto>);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), stats, move || api::leveling::get_voice_stats(guild_id));

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Voice activity" }
                match stats() {
                    Some(stats) => rsx! {
                        div {
                            class: "stats",
                            div {
                                class: "stat",
                                div { class: "stat-title", "Sessions" }
                                div { class: "stat-value", "{stats.total_sessions}" }
                            }
                            div {
                                class: "stat",
                                div { class: "stat-title", "In voice now" }
                                div { class: "stat-value text-success", "{stats.active_sessions}" }
                            }
                        }
                    },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_role_reward() {
        let reward = build_reward("10", "role", "123", " Veteran ").unwrap();

        assert_eq!(reward.level, 10);
        assert_eq!(reward.reward_value, "123");
        assert_eq!(reward.reward_name.as_deref(), Some("Veteran"));
    }

    #[test]
    fn rejects_invalid_level_and_missing_value() {
        assert!(build_reward("0", "role", "123", "").is_err());
        assert!(build_reward("abc", "role", "123", "").is_err());
        assert_eq!(
            build_reward("3", "emoji", "", ""),
            Err("Select an emoji".to_string())
        );
    }
}
