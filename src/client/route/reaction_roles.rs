use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, ConfirmationModal, GuildRequired, Page, ServerDataSelector},
        constant::SITE_NAME,
        hook::{bump, use_refetch},
        model::{
            format::short_time,
            selector::{first, single, SelectorKind},
        },
        store::toast::Toaster,
    },
    model::reaction_role::{
        CreateReactionRoleDto, ReactionRoleEntryDto, ReactionRoleListDto, MAX_REACTION_ROLES,
        PENDING_MESSAGE_ID,
    },
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

/// Keeps the rows that have both an emoji and a role.
///
/// Fails when no row is complete or when the panel exceeds the role limit.
pub fn complete_entries(
    rows: &[ReactionRoleEntryDto],
) -> Result<Vec<ReactionRoleEntryDto>, String> {
    let entries: Vec<_> = rows
        .iter()
        .filter(|row| !row.emoji.trim().is_empty() && !row.role_id.is_empty())
        .map(|row| ReactionRoleEntryDto {
            emoji: row.emoji.trim().to_string(),
            role_id: row.role_id.clone(),
            label: row.label.trim().to_string(),
        })
        .collect();

    if entries.is_empty() {
        return Err("Add at least one emoji with a role".to_string());
    }
    if entries.len() > MAX_REACTION_ROLES {
        return Err(format!("At most {} roles per message", MAX_REACTION_ROLES));
    }

    Ok(entries)
}

#[component]
pub fn ReactionRoles() -> Element {
    let guild_id = use_guild_id();
    let refetch = use_refetch();

    rsx! {
        Title { "Reaction Roles | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Reaction Roles" }
            match guild_id {
                Some(guild_id) => rsx! {
                    CreatePanel { guild_id, refetch }
                    ReactionRoleList { guild_id, refetch }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn CreatePanel(guild_id: u64, refetch: Signal<u32>) -> Element {
    let mut toaster = use_context::<Toaster>();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut channel_id = use_signal(String::new);
    let mut kind = use_signal(|| "button".to_string());
    let mut color = use_signal(|| "#5865F2".to_string());
    let mut rows = use_signal(|| vec![ReactionRoleEntryDto::default()]);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() || channel_id().is_empty() {
            toaster.error("Title and channel are required");
            return;
        }
        let roles = match complete_entries(&rows()) {
            Ok(roles) => roles,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        let payload = CreateReactionRoleDto {
            title: title().trim().to_string(),
            description: Some(description()).filter(|d| !d.trim().is_empty()),
            channel_id: channel_id(),
            kind: kind(),
            roles,
            color: color(),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match api::reaction_role::create_reaction_roles(guild_id, payload).await {
                Ok(created) => {
                    toaster.success(format!("Saved panel with {} roles, send it to post it", created.created));
                    title.set(String::new());
                    description.set(String::new());
                    rows.set(vec![ReactionRoleEntryDto::default()]);
                    bump(refetch);
                }
                Err(err) => toaster.error(err.message),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let row_count = rows.read().len();

    rsx! {
        div {
            class: "card bg-base-200",
            form {
                class: "card-body grid gap-4 md:grid-cols-2",
                onsubmit: submit,
                h2 { class: "card-title md:col-span-2", "New message" }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Title" }
                    input {
                        class: "input input-bordered",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&channel_id()),
                        on_change: move |ids: Vec<String>| channel_id.set(first(ids)),
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Description" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Type" }
                    select {
                        class: "select select-bordered",
                        value: "{kind}",
                        onchange: move |e| kind.set(e.value()),
                        option { value: "button", "Buttons" }
                        option { value: "reaction", "Reactions" }
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Embed color" }
                    input {
                        r#type: "color",
                        class: "input input-bordered",
                        value: "{color}",
                        oninput: move |e| color.set(e.value()),
                    }
                }
                div {
                    class: "md:col-span-2 flex flex-col gap-2",
                    span { class: "label-text", "Roles ({row_count}/{MAX_REACTION_ROLES})" }
                    for (index, row) in rows().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "grid grid-cols-[6rem_1fr_1fr_auto] gap-2 items-center",
                            input {
                                class: "input input-bordered",
                                placeholder: "Emoji",
                                value: "{row.emoji}",
                                oninput: move |e| rows.write()[index].emoji = e.value(),
                            }
                            ServerDataSelector {
                                guild_id,
                                kind: SelectorKind::Role,
                                selected: single(&row.role_id),
                                on_change: move |ids: Vec<String>| rows.write()[index].role_id = first(ids),
                            }
                            input {
                                class: "input input-bordered",
                                placeholder: "Label (optional)",
                                value: "{row.label}",
                                oninput: move |e| rows.write()[index].label = e.value(),
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-ghost btn-sm",
                                disabled: row_count == 1,
                                onclick: move |_| {
                                    rows.write().remove(index);
                                },
                                "✕"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline btn-sm self-start",
                        disabled: row_count >= MAX_REACTION_ROLES,
                        onclick: move |_| rows.write().push(ReactionRoleEntryDto::default()),
                        "Add role"
                    }
                }
                div {
                    class: "md:col-span-2 flex justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Post message"
                    }
                }
            }
        }
    }
}

#[component]
fn ReactionRoleList(guild_id: u64, refetch: Signal<u32>) -> Element {
    let mut toaster = use_context::<Toaster>();
    let reaction_roles = use_signal(|| None::<ReactionRoleListDto>);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<i32>);
    let mut deleting = use_signal(|| false);
    let mut sending = use_signal(|| None::<i32>);

    #[cfg(feature = "web")]
    use_fetch(refetch, reaction_roles, move || {
        api::reaction_role::get_reaction_roles(guild_id)
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Configured roles" }
                match reaction_roles() {
                    Some(list) if !list.reaction_roles.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Title" } th { "Type" } th { "Emoji" } th { "Role" } th { "Message" } th { "Created" } th {} } }
                            tbody {
                                for entry in list.reaction_roles {
                                    {
                                        let id = entry.id;
                                        let pending = entry.message_id == PENDING_MESSAGE_ID;
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td { "{entry.title}" }
                                                td { span { class: "badge badge-outline", "{entry.kind}" } }
                                                td { "{entry.emoji}" }
                                                td { "{entry.role_id}" }
                                                td {
                                                    if pending {
                                                        span { class: "badge badge-warning", "Not sent" }
                                                    } else {
                                                        span { class: "badge badge-success", "Posted" }
                                                    }
                                                }
                                                td { {short_time(&entry.created_at)} }
                                                td {
                                                    class: "text-right flex gap-2 justify-end",
                                                    if pending {
                                                        button {
                                                            class: "btn btn-primary btn-xs",
                                                            disabled: sending().is_some(),
                                                            onclick: move |_| {
                                                                sending.set(Some(id));

                                                                #[cfg(feature = "web")]
                                                                spawn(async move {
                                                                    match api::reaction_role::send_reaction_role_panel(guild_id, id).await {
                                                                        Ok(_) => {
                                                                            toaster.success("Panel posted");
                                                                            bump(refetch);
                                                                        }
                                                                        Err(err) => toaster.error(err.message),
                                                                    }
                                                                    sending.set(None);
                                                                });
                                                            },
                                                            "Send"
                                                        }
                                                    }
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
                    Some(_) => rsx! { p { class: "opacity-50", "No reaction roles yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete reaction role",
            message: "The role stops being handed out for this emoji.",
            is_processing: deleting(),
            on_confirm: move |_| {
                let Some(id) = to_delete() else {
                    return;
                };
                deleting.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::reaction_role::delete_reaction_role(guild_id, id).await {
                        Ok(()) => toaster.success("Reaction role deleted"),
                        Err(err) => toaster.error(err.message),
                    }
                    deleting.set(false);
                    show_delete.set(false);
                    bump(refetch);
                });

                #[cfg(not(feature = "web"))]
                let _ = (id, &mut toaster);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(emoji: &str, role_id: &str) -> ReactionRoleEntryDto {
        ReactionRoleEntryDto {
            emoji: emoji.to_string(),
            role_id: role_id.to_string(),
            label: String::new(),
        }
    }

    #[test]
    fn skips_incomplete_rows() {
        let rows = vec![row(" 🎮 ", "1"), row("", "2"), row("🎵", "")];

        let entries = complete_entries(&rows).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].emoji, "🎮");
    }

    #[test]
    fn rejects_empty_and_oversized_panels() {
        assert!(complete_entries(&[row("", "")]).is_err());

        let rows: Vec<_> = (0..=MAX_REACTION_ROLES)
            .map(|i| row("⭐", &i.to_string()))
            .collect();
        assert!(complete_entries(&rows).is_err());
    }
}
