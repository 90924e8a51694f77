use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{edit_settings, use_guild_settings, use_refetch},
        model::selector::SelectorKind,
        store::toast::Toaster,
    },
    model::guild::{PermissionsDto, UpdateGuildConfigDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api,
        hook::{save_settings, use_fetch},
    },
    model::guild::UpdatePermissionDto,
};

/// Slash commands whose use can be limited to roles
const COMMANDS: [&str; 5] = ["warn", "warnings", "rank", "leaderboard", "coinflip"];

#[component]
pub fn Permissions() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Permissions | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Permissions" }
            match guild_id {
                Some(guild_id) => rsx! {
                    StaffRoles { guild_id }
                    CommandRoles { guild_id }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn StaffRoles(guild_id: u64) -> Element {
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
            admin_roles: Some(current.admin_roles),
            mod_roles: Some(current.mod_roles),
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
                h2 { class: "card-title md:col-span-2", "Staff roles" }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Admin roles" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Role,
                        multiple: true,
                        selected: current.admin_roles.clone(),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.admin_roles = ids),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Moderator roles" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Role,
                        multiple: true,
                        selected: current.mod_roles.clone(),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.mod_roles = ids),
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
fn CommandRoles(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let permissions = use_signal(|| None::<PermissionsDto>);

    #[cfg(feature = "web")]
    use_fetch(use_refetch(), permissions, move || api::guild::get_permissions(guild_id));

    let Some(current) = permissions() else {
        return rsx! { span { class: "loading loading-spinner" } };
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Command roles" }
                p { class: "text-sm opacity-60", "Commands without roles can be used by everyone." }
                for command in COMMANDS {
                    div {
                        key: "{command}",
                        class: "grid gap-2 md:grid-cols-[10rem_1fr] items-center",
                        span { class: "font-mono", "/{command}" }
                        ServerDataSelector {
                            guild_id,
                            kind: SelectorKind::Role,
                            multiple: true,
                            placeholder: "Everyone",
                            selected: current.command_permissions.get(command).cloned().unwrap_or_default(),
                            on_change: move |role_ids: Vec<String>| {
                                #[cfg(feature = "web")]
                                {
                                    let mut permissions = permissions;
                                    spawn(async move {
                                        let payload = UpdatePermissionDto {
                                            command: command.to_string(),
                                            role_ids,
                                        };
                                        match api::guild::update_permission(guild_id, payload).await {
                                            Ok(updated) => {
                                                permissions.set(Some(updated));
                                                toaster.success(format!("Updated /{}", command));
                                            }
                                            Err(err) => toaster.error(err.message),
                                        }
                                    });
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
