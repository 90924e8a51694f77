use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{edit_settings, use_guild_settings, use_refetch},
        model::{
            format::short_time,
            selector::{first, single, SelectorKind},
        },
        store::toast::Toaster,
    },
    model::{
        game::{GameListDto, GameStatsDto},
        guild::UpdateGuildConfigDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api,
    hook::{save_settings, use_fetch},
};

#[component]
pub fn Games() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Games | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Games" }
            match guild_id {
                Some(guild_id) => rsx! {
                    GameSettings { guild_id }
                    GameOverview { guild_id }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn GameSettings(guild_id: u64) -> Element {
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
            games_enabled: Some(current.games_enabled),
            games_channel: Some(current.games_channel),
            game_cooldown: Some(current.game_cooldown),
            max_active_games: Some(current.max_active_games),
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
                        checked: current.games_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.games_enabled = e.checked()),
                    }
                    span { "Games enabled" }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Games channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        placeholder: "Any channel",
                        selected: single(&current.games_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.games_channel = first(ids)),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Cooldown (seconds)" }
                    input {
                        r#type: "number",
                        min: "0",
                        class: "input input-bordered",
                        value: "{current.game_cooldown}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                edit_settings(settings, |s| s.game_cooldown = value);
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Max active games" }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{current.max_active_games}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                edit_settings(settings, |s| s.max_active_games = value);
                            }
                        },
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
fn GameOverview(guild_id: u64) -> Element {
    let refetch = use_refetch();
    let games = use_signal(|| None::<GameListDto>);
    let stats = use_signal(|| None::<GameStatsDto>);

    #[cfg(feature = "web")]
    use_fetch(refetch, games, move || api::game::get_active_games(guild_id));
    #[cfg(feature = "web")]
    use_fetch(refetch, stats, move || api::game::get_game_stats(guild_id));

    rsx! {
        if let Some(stats) = stats() {
            div {
                class: "stats bg-base-200",
                div {
                    class: "stat",
                    div { class: "stat-title", "Games played" }
                    div { class: "stat-value", "{stats.total_games}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Running" }
                    div { class: "stat-value", "{stats.active_games}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Top player" }
                    div { class: "stat-value text-lg", {stats.top_player.unwrap_or_else(|| "-".to_string())} }
                }
            }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Active games" }
                match games() {
                    Some(list) if !list.games.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Game" } th { "Channel" } th { "Players" } th { "Started" } } }
                            tbody {
                                for game in list.games {
                                    tr {
                                        key: "{game.id}",
                                        td { "{game.game_type}" }
                                        td { "{game.channel_id}" }
                                        td { {game.players.join(", ")} }
                                        td { {short_time(&game.created_at)} }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "No games running" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
    }
}
