use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{edit_settings, use_guild_settings},
        model::selector::{first, single, SelectorKind},
        store::toast::Toaster,
    },
    model::guild::UpdateGuildConfigDto,
};

#[cfg(feature = "web")]
use crate::client::hook::save_settings;

/// Appends `role_id` unless it is empty or already listed.
pub fn add_unique(roles: &mut Vec<String>, role_id: String) -> bool {
    if role_id.is_empty() || roles.contains(&role_id) {
        return false;
    }
    roles.push(role_id);
    true
}

#[component]
pub fn Welcome() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Welcome | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Welcome & Goodbye" }
            match guild_id {
                Some(guild_id) => rsx! { WelcomeSettings { guild_id } },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn WelcomeSettings(guild_id: u64) -> Element {
    let settings = use_guild_settings(guild_id);
    let mut toaster = use_context::<Toaster>();
    let mut pending_role = use_signal(Vec::<String>::new);

    let Some(current) = settings() else {
        return rsx! { span { class: "loading loading-spinner" } };
    };

    let save = move |_: MouseEvent| {
        let Some(current) = settings() else {
            return;
        };
        let update = UpdateGuildConfigDto {
            welcome_enabled: Some(current.welcome_enabled),
            welcome_channel: Some(current.welcome_channel),
            welcome_message: Some(current.welcome_message),
            goodbye_enabled: Some(current.goodbye_enabled),
            goodbye_message: Some(current.goodbye_message),
            auto_roles: Some(current.auto_roles),
            ..Default::default()
        };

        #[cfg(feature = "web")]
        spawn(save_settings(guild_id, update, settings, toaster));
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Messages" }
                p {
                    class: "text-sm opacity-60",
                    "Placeholders: {{user}} mentions the member, {{server}} is the server name"
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&current.welcome_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.welcome_channel = first(ids)),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.welcome_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.welcome_enabled = e.checked()),
                    }
                    span { "Send welcome message" }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    rows: "3",
                    placeholder: "Welcome {{user}} to {{server}}!",
                    value: "{current.welcome_message}",
                    oninput: move |e| edit_settings(settings, |s| s.welcome_message = e.value()),
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.goodbye_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.goodbye_enabled = e.checked()),
                    }
                    span { "Send goodbye message" }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    rows: "3",
                    placeholder: "{{user}} left {{server}}.",
                    value: "{current.goodbye_message}",
                    oninput: move |e| edit_settings(settings, |s| s.goodbye_message = e.value()),
                }
            }
        }
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "Auto roles" }
                div {
                    class: "flex gap-2",
                    div {
                        class: "flex-1",
                        ServerDataSelector {
                            guild_id,
                            kind: SelectorKind::Role,
                            selected: pending_role(),
                            on_change: move |ids: Vec<String>| pending_role.set(ids),
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let role_id = first(pending_role());
                            let mut added = false;
                            edit_settings(settings, |s| added = add_unique(&mut s.auto_roles, role_id));
                            if added {
                                pending_role.set(Vec::new());
                            } else {
                                toaster.error("Role is already in the list");
                            }
                        },
                        "Add"
                    }
                }
                ul {
                    class: "flex flex-wrap gap-2",
                    for role_id in current.auto_roles.clone() {
                        {
                            let target = role_id.clone();
                            rsx! {
                                li {
                                    key: "{role_id}",
                                    class: "badge badge-lg gap-2",
                                    "{role_id}"
                                    button {
                                        class: "btn btn-ghost btn-xs",
                                        onclick: move |_| edit_settings(settings, |s| s.auto_roles.retain(|id| *id != target)),
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        div {
            class: "flex justify-end",
            button { class: "btn btn-primary", onclick: save, "Save" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_roles_stay_unique() {
        let mut roles = vec!["1".to_string()];

        assert!(!add_unique(&mut roles, "1".to_string()));
        assert!(!add_unique(&mut roles, String::new()));
        assert!(add_unique(&mut roles, "2".to_string()));
        assert_eq!(roles, vec!["1", "2"]);
    }
}
