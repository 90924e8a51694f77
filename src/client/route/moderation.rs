use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, ConfirmationModal, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{bump, edit_settings, use_guild_settings, use_refetch},
        model::{
            format::short_time,
            selector::{first, single, SelectorKind},
        },
        store::toast::Toaster,
    },
    model::{
        guild::UpdateGuildConfigDto,
        moderation::{ModLogListDto, WarningDto, WarningListDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api,
    hook::{save_settings, use_fetch},
};

const SHOWN_MOD_LOGS: usize = 20;

/// Groups warnings per user, keeping users whose id contains `filter`.
pub fn group_warnings(warnings: &[WarningDto], filter: &str) -> Vec<(String, Vec<WarningDto>)> {
    let filter = filter.trim();
    let mut groups: BTreeMap<String, Vec<WarningDto>> = BTreeMap::new();

    for warning in warnings {
        if filter.is_empty() || warning.user_id.contains(filter) {
            groups
                .entry(warning.user_id.clone())
                .or_default()
                .push(warning.clone());
        }
    }

    groups.into_iter().collect()
}

#[component]
pub fn Moderation() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Moderation | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Moderation" }
            match guild_id {
                Some(guild_id) => rsx! {
                    ModerationSettings { guild_id }
                    Warnings { guild_id }
                    ModLogs { guild_id }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn ModerationSettings(guild_id: u64) -> Element {
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
            mod_log_channel: Some(current.mod_log_channel),
            mute_role: Some(current.mute_role),
            warn_threshold: Some(current.warn_threshold),
            warn_action: Some(current.warn_action),
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
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Mod log channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&current.mod_log_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.mod_log_channel = first(ids)),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Mute role" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Role,
                        selected: single(&current.mute_role),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.mute_role = first(ids)),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Warnings before action" }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{current.warn_threshold}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                edit_settings(settings, |s| s.warn_threshold = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Action" }
                    select {
                        class: "select select-bordered",
                        value: "{current.warn_action}",
                        onchange: move |e| edit_settings(settings, |s| s.warn_action = e.value()),
                        option { value: "mute", "Mute" }
                        option { value: "kick", "Kick" }
                        option { value: "ban", "Ban" }
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
fn Warnings(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let warnings = use_signal(|| None::<WarningListDto>);
    let mut filter = use_signal(String::new);
    let mut to_clear = use_signal(|| None::<String>);
    let mut show_confirm = use_signal(|| false);
    let mut clearing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, warnings, move || api::moderation::get_warnings(guild_id));

    let groups = warnings()
        .map(|list| group_warnings(&list.warnings, &filter()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between gap-4",
                    h2 { class: "card-title", "Warnings" }
                    input {
                        class: "input input-bordered input-sm",
                        placeholder: "Filter by user ID",
                        value: "{filter}",
                        oninput: move |e| filter.set(e.value()),
                    }
                }
                if groups.is_empty() {
                    p { class: "opacity-50", "No warnings" }
                }
                for (user_id, entries) in groups {
                    {
                        let target = user_id.clone();
                        rsx! {
                            div {
                                key: "{user_id}",
                                class: "border border-base-300 rounded-lg p-3",
                                div {
                                    class: "flex items-center justify-between",
                                    span { class: "font-semibold", "{user_id} ({entries.len()})" }
                                    button {
                                        class: "btn btn-error btn-xs",
                                        onclick: move |_| {
                                            to_clear.set(Some(target.clone()));
                                            show_confirm.set(true);
                                        },
                                        "Clear all"
                                    }
                                }
                                ul {
                                    class: "text-sm mt-2",
                                    for warning in entries {
                                        li {
                                            key: "{warning.id}",
                                            {format!("{} · {}", short_time(&warning.created_at), warning.reason)}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_confirm,
            title: "Clear warnings",
            message: format!("Remove every warning of {}?", to_clear().unwrap_or_default()),
            confirm_text: "Clear",
            is_processing: clearing(),
            on_confirm: move |_| {
                let Some(user_id) = to_clear() else {
                    return;
                };
                clearing.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::moderation::clear_warnings(guild_id, &user_id).await {
                        Ok(result) => toaster.success(format!("Removed {} warnings", result.deleted)),
                        Err(err) => toaster.error(err.message),
                    }
                    clearing.set(false);
                    show_confirm.set(false);
                    bump(refetch);
                });
            },
        }
    }
}

#[component]
fn ModLogs(guild_id: u64) -> Element {
    let logs = use_signal(|| None::<ModLogListDto>);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), logs, move || api::moderation::get_mod_logs(guild_id, 50));

    let entries = logs()
        .map(|list| list.logs.into_iter().take(SHOWN_MOD_LOGS).collect::<Vec<_>>())
        .unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Moderation log" }
                table {
                    class: "table table-sm",
                    thead { tr { th { "When" } th { "Action" } th { "User" } th { "Moderator" } th { "Reason" } } }
                    tbody {
                        for log in entries {
                            tr {
                                key: "{log.id}",
                                td { {short_time(&log.created_at)} }
                                td { span { class: "badge badge-outline", "{log.action}" } }
                                td { "{log.user_id}" }
                                td { "{log.moderator_id}" }
                                td { "{log.reason}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn warning(id: i32, user_id: &str) -> WarningDto {
        WarningDto {
            id,
            guild_id: "1".to_string(),
            user_id: user_id.to_string(),
            moderator_id: "9".to_string(),
            reason: "spam".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn groups_warnings_by_user_with_filter() {
        let warnings = vec![warning(1, "111"), warning(2, "222"), warning(3, "111")];

        let groups = group_warnings(&warnings, "");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "111");
        assert_eq!(groups[0].1.len(), 2);

        let filtered = group_warnings(&warnings, "22");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, "222");
    }
}
