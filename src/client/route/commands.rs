use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, ConfirmationModal, GuildRequired, Modal, Page},
        constant::SITE_NAME,
        hook::{bump, use_refetch},
        model::format::short_time,
        store::toast::Toaster,
    },
    model::command::{CreateCustomCommandDto, CustomCommandListDto},
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

/// Normalizes a command name: lowercase, no leading `!` or surrounding whitespace.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches('!').to_lowercase()
}

pub fn validate_command(name: &str, response: &str) -> Result<CreateCustomCommandDto, String> {
    let name = normalize_name(name);
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err("Name must be a single word".to_string());
    }
    if response.trim().is_empty() {
        return Err("Response cannot be empty".to_string());
    }

    Ok(CreateCustomCommandDto {
        name,
        response: response.to_string(),
    })
}

#[component]
pub fn Commands() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Commands | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Custom Commands" }
            match guild_id {
                Some(guild_id) => rsx! { CommandList { guild_id } },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn CommandList(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let commands = use_signal(|| None::<CustomCommandListDto>);
    let mut name = use_signal(String::new);
    let mut response = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    // Name of the command being replaced, if editing
    let mut editing = use_signal(|| None::<String>);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<String>);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, commands, move || api::command::get_commands(guild_id));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match validate_command(&name(), &response()) {
            Ok(payload) => payload,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            // Commands are keyed by name, so an edit replaces the old entry
            if let Some(previous) = editing() {
                if let Err(err) = api::command::delete_command(guild_id, &previous).await {
                    toaster.error(err.message);
                    processing.set(false);
                    return;
                }
            }
            match api::command::create_command(guild_id, payload).await {
                Ok(command) => {
                    toaster.success(format!("Saved !{}", command.name));
                    show_form.set(false);
                }
                Err(err) => toaster.error(err.message),
            }
            processing.set(false);
            bump(refetch);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let form_title = match editing() {
        Some(previous) => format!("Edit !{}", previous),
        None => "New command".to_string(),
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Commands" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            editing.set(None);
                            name.set(String::new());
                            response.set(String::new());
                            show_form.set(true);
                        },
                        "New command"
                    }
                }
                match commands() {
                    Some(list) if !list.commands.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Name" } th { "Response" } th { "Uses" } th { "Created" } th {} } }
                            tbody {
                                for command in list.commands {
                                    {
                                        let edit_name = command.name.clone();
                                        let edit_response = command.response.clone();
                                        let delete_name = command.name.clone();
                                        rsx! {
                                            tr {
                                                key: "{command.id}",
                                                td { class: "font-mono", "!{command.name}" }
                                                td { class: "max-w-md truncate", "{command.response}" }
                                                td { "{command.uses}" }
                                                td { {short_time(&command.created_at)} }
                                                td {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-ghost btn-xs",
                                                        onclick: move |_| {
                                                            editing.set(Some(edit_name.clone()));
                                                            name.set(edit_name.clone());
                                                            response.set(edit_response.clone());
                                                            show_form.set(true);
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-error btn-xs",
                                                        onclick: move |_| {
                                                            to_delete.set(Some(delete_name.clone()));
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
                    Some(_) => rsx! { p { class: "opacity-50", "No custom commands yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        Modal {
            show: show_form,
            title: form_title,
            prevent_close: processing(),
            form {
                class: "flex flex-col gap-4",
                onsubmit: submit,
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Name" }
                    label {
                        class: "input input-bordered flex items-center gap-1",
                        span { class: "opacity-50", "!" }
                        input {
                            class: "grow",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Response" }
                    textarea {
                        class: "textarea textarea-bordered h-32",
                        value: "{response}",
                        oninput: move |e| response.set(e.value()),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: processing(),
                        onclick: move |_| show_form.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: processing(),
                        "Save"
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete command",
            message: format!("Delete !{}?", to_delete().unwrap_or_default()),
            is_processing: processing(),
            on_confirm: move |_| {
                let Some(command) = to_delete() else {
                    return;
                };
                processing.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::command::delete_command(guild_id, &command).await {
                        Ok(()) => toaster.success("Command deleted"),
                        Err(err) => toaster.error(err.message),
                    }
                    processing.set(false);
                    show_delete.set(false);
                    bump(refetch);
                });

                #[cfg(not(feature = "web"))]
                let _ = command;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_prefix_and_case() {
        assert_eq!(normalize_name("  !Rules "), "rules");
    }

    #[test]
    fn validates_name_and_response() {
        assert!(validate_command("two words", "hi").is_err());
        assert!(validate_command("rules", "   ").is_err());

        let command = validate_command("!Rules", "Be nice").unwrap();
        assert_eq!(command.name, "rules");
        assert_eq!(command.response, "Be nice");
    }
}
