use dioxus::prelude::*;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        hook::{bump, use_refetch},
        store::{guild::GuildState, toast::Toaster},
    },
    model::{
        bot::{BotLogsDto, BotStatusDto},
        guild::GuildStatsDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

const LOG_LINES: usize = 100;

#[component]
pub fn Dashboard() -> Element {
    let guild = use_context::<Signal<GuildState>>();
    let guild_id = guild.read().guild_id;

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Dashboard" }
            GuildPicker {}
            BotControls {}
            if let Some(guild_id) = guild_id {
                GuildOverview { key: "{guild_id}", guild_id }
            }
        }
    }
}

#[component]
fn GuildPicker() -> Element {
    let mut guild = use_context::<Signal<GuildState>>();
    let mut toaster = use_context::<Toaster>();
    let current = guild.read().guild_id.map(|id| id.to_string()).unwrap_or_default();
    let mut input = use_signal(|| current);

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Server" }
                form {
                    class: "flex gap-2",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        guild.write().select(&input());
                        if guild.read().guild_id.is_some() {
                            toaster.success("Server selected");
                        } else {
                            toaster.error("Enter a valid Discord server ID");
                        }
                    },
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Discord server ID",
                        value: "{input}",
                        oninput: move |e| input.set(e.value()),
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Select" }
                }
            }
        }
    }
}

#[component]
fn BotControls() -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let status = use_signal(|| None::<BotStatusDto>);
    let logs = use_signal(|| None::<BotLogsDto>);
    let mut show_logs = use_signal(|| false);
    let mut busy = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, status, api::bot::get_status);

    let running = status().is_some_and(|s| s.running);

    let toggle = move |_: MouseEvent| {
        busy.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = if running {
                api::bot::stop().await
            } else {
                api::bot::start().await
            };
            match result {
                Ok(outcome) if outcome.success => toaster.success(outcome.message),
                Ok(outcome) => toaster.error(outcome.message),
                Err(err) => toaster.error(err.message),
            }
            busy.set(false);
            bump(refetch);
        });
    };

    let toggle_logs = move |_: MouseEvent| {
        let next = !show_logs();
        show_logs.set(next);

        #[cfg(feature = "web")]
        {
            if next {
                let mut logs = logs;
                spawn(async move {
                    match api::bot::get_logs(LOG_LINES).await {
                        Ok(fetched) => logs.set(Some(fetched)),
                        Err(err) => toaster.error(err.message),
                    }
                });
            }
        }
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Bot" }
                    div {
                        class: "flex gap-2",
                        button {
                            class: if running { "btn btn-error" } else { "btn btn-success" },
                            disabled: busy() || status().is_none(),
                            onclick: toggle,
                            if running { "Stop bot" } else { "Start bot" }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: toggle_logs,
                            if show_logs() { "Hide logs" } else { "Show logs" }
                        }
                    }
                }
                if show_logs() {
                    match logs() {
                        Some(logs) => rsx! {
                            div {
                                class: "grid gap-2 md:grid-cols-2",
                                pre { class: "bg-base-300 p-2 rounded text-xs overflow-auto max-h-80", "{logs.logs}" }
                                pre { class: "bg-base-300 p-2 rounded text-xs text-error overflow-auto max-h-80", "{logs.errors}" }
                            }
                        },
                        None => rsx! { span { class: "loading loading-spinner" } },
                    }
                }
            }
        }
    }
}

#[component]
fn GuildOverview(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let stats = use_signal(|| None::<GuildStatsDto>);
    let mut syncing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), stats, move || api::guild::get_guild_stats(guild_id));

    let sync = move |_: MouseEvent| {
        syncing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match api::server_data::sync_server_data(guild_id).await {
                Ok(result) => toaster.success(result.message),
                Err(err) => toaster.error(err.message),
            }
            syncing.set(false);
        });
    };

    let Some(stats) = stats() else {
        return rsx! { span { class: "loading loading-spinner" } };
    };

    rsx! {
        div {
            class: "flex justify-end",
            button {
                class: "btn btn-outline btn-sm",
                disabled: syncing(),
                onclick: sync,
                "Sync roles & channels"
            }
        }
        div {
            class: "stats stats-vertical md:stats-horizontal bg-base-200",
            StatCard { title: "Users", value: stats.total_users }
            StatCard { title: "Warnings", value: stats.total_warnings }
            StatCard { title: "Commands", value: stats.total_commands }
            StatCard { title: "News", value: stats.total_news }
        }
        div {
            class: "grid gap-4 md:grid-cols-2",
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Top users" }
                    table {
                        class: "table table-sm",
                        thead { tr { th { "User" } th { "Level" } th { "XP" } } }
                        tbody {
                            for member in stats.top_users {
                                tr {
                                    key: "{member.user_id}",
                                    td { "{member.user_id}" }
                                    td { "{member.level}" }
                                    td { "{member.xp}" }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Recent mod actions" }
                    if stats.recent_mod_actions.is_empty() {
                        p { class: "opacity-50", "No actions yet" }
                    }
                    ul {
                        class: "flex flex-col gap-1 text-sm",
                        for log in stats.recent_mod_actions {
                            li {
                                key: "{log.id}",
                                span { class: "badge badge-outline mr-2", "{log.action}" }
                                "{log.user_id}: {log.reason}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
        }
    }
}
