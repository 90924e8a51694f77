use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            use_guild_id, ConfirmationModal, GuildRequired, Modal, Page, ServerDataSelector,
        },
        constant::SITE_NAME,
        hook::{bump, use_refetch},
        model::{
            format::short_time,
            selector::{first, single, SelectorKind},
        },
        store::{toast::Toaster, user::UserState},
    },
    model::ticket::{
        CreateTicketPanelDto, TicketListDto, TicketPanelDto, TicketPanelListDto, TicketStatsDto,
        UpdateTicketPanelDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

const STATUS_FILTERS: [&str; 4] = ["all", "open", "claimed", "closed"];

/// Editable state of the panel dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelForm {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub color: String,
    pub button_label: String,
    pub button_emoji: String,
    pub ticket_category: String,
    pub ticket_name_template: String,
    pub support_roles: Vec<String>,
    pub ping_roles: Vec<String>,
    pub claim_enabled: bool,
    pub transcript_enabled: bool,
}

impl Default for PanelForm {
    fn default() -> Self {
        Self {
            channel_id: String::new(),
            title: "🎫 Support Tickets".to_string(),
            description: "Click the button below to open a ticket.".to_string(),
            color: "#5865F2".to_string(),
            button_label: "Open Ticket".to_string(),
            button_emoji: "🎫".to_string(),
            ticket_category: String::new(),
            ticket_name_template: "ticket-{number}".to_string(),
            support_roles: Vec::new(),
            ping_roles: Vec::new(),
            claim_enabled: true,
            transcript_enabled: true,
        }
    }
}

impl PanelForm {
    pub fn from_panel(panel: &TicketPanelDto) -> Self {
        Self {
            channel_id: panel.channel_id.clone(),
            title: panel.title.clone(),
            description: panel.description.clone(),
            color: panel.color.clone(),
            button_label: panel.button_label.clone(),
            button_emoji: panel.button_emoji.clone(),
            ticket_category: panel.ticket_category.clone().unwrap_or_default(),
            ticket_name_template: panel.ticket_name_template.clone(),
            support_roles: panel.support_roles.clone(),
            ping_roles: panel.ping_roles.clone(),
            claim_enabled: panel.claim_enabled,
            transcript_enabled: panel.transcript_enabled,
        }
    }

    pub fn into_create(self) -> CreateTicketPanelDto {
        CreateTicketPanelDto {
            channel_id: self.channel_id,
            title: Some(self.title),
            description: Some(self.description),
            color: Some(self.color),
            button_label: Some(self.button_label),
            button_emoji: Some(self.button_emoji),
            ticket_category: Some(self.ticket_category).filter(|id| !id.is_empty()),
            ticket_name_template: Some(self.ticket_name_template),
            support_roles: Some(self.support_roles),
            ping_roles: Some(self.ping_roles),
            claim_enabled: Some(self.claim_enabled),
            transcript_enabled: Some(self.transcript_enabled),
            ..Default::default()
        }
    }

    /// Panel categories & custom fields are not edited here and stay untouched.
    pub fn into_update(self) -> UpdateTicketPanelDto {
        UpdateTicketPanelDto {
            channel_id: Some(self.channel_id),
            title: Some(self.title),
            description: Some(self.description),
            color: Some(self.color),
            button_label: Some(self.button_label),
            button_emoji: Some(self.button_emoji),
            ticket_category: Some(self.ticket_category),
            ticket_name_template: Some(self.ticket_name_template),
            support_roles: Some(self.support_roles),
            ping_roles: Some(self.ping_roles),
            claim_enabled: Some(self.claim_enabled),
            transcript_enabled: Some(self.transcript_enabled),
            ..Default::default()
        }
    }
}

/// Query value for the status filter; `all` means no filter.
pub fn status_query(filter: &str) -> Option<String> {
    (filter != "all").then(|| filter.to_string())
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "open" => "badge badge-success",
        "claimed" => "badge badge-warning",
        _ => "badge badge-ghost",
    }
}

#[component]
pub fn Tickets() -> Element {
    let guild_id = use_guild_id();
    let refetch = use_refetch();

    rsx! {
        Title { "Tickets | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Tickets" }
            match guild_id {
                Some(guild_id) => rsx! {
                    TicketStats { guild_id, refetch }
                    Panels { guild_id }
                    TicketList { guild_id, refetch }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn TicketStats(guild_id: u64, refetch: Signal<u32>) -> Element {
    let stats = use_signal(|| None::<TicketStatsDto>);

    #[cfg(feature = "web")]
    use_fetch(refetch, stats, move || api::ticket::get_ticket_stats(guild_id));

    let stats = stats().unwrap_or_default();

    rsx! {
        div {
            class: "stats bg-base-200",
            div {
                class: "stat",
                div { class: "stat-title", "Open" }
                div { class: "stat-value text-success", "{stats.open}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Claimed" }
                div { class: "stat-value text-warning", "{stats.claimed}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Closed" }
                div { class: "stat-value", "{stats.closed}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Total" }
                div { class: "stat-value", "{stats.total}" }
            }
        }
    }
}

#[component]
fn Panels(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let panels = use_signal(|| None::<TicketPanelListDto>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<i32>);
    let mut form = use_signal(PanelForm::default);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<i32>);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, panels, move || api::ticket::get_panels(guild_id));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if current.channel_id.is_empty() {
            toaster.error("Select the channel the panel is posted in");
            return;
        }
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match editing() {
                Some(id) => api::ticket::update_panel(guild_id, id, current.into_update()).await,
                None => api::ticket::create_panel(guild_id, current.into_create()).await,
            };
            match result {
                Ok(_) => {
                    toaster.success("Panel saved");
                    show_form.set(false);
                    bump(refetch);
                }
                Err(err) => toaster.error(err.message),
            }
            processing.set(false);
        });
    };

    let current = form();
    let form_title = if editing().is_some() { "Edit panel" } else { "New panel" }.to_string();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Panels" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            editing.set(None);
                            form.set(PanelForm::default());
                            show_form.set(true);
                        },
                        "New panel"
                    }
                }
                match panels() {
                    Some(list) if !list.panels.is_empty() => rsx! {
                        div {
                            class: "grid gap-3 md:grid-cols-2",
                            for panel in list.panels {
                                {
                                    let id = panel.id;
                                    let edit_form = PanelForm::from_panel(&panel);
                                    rsx! {
                                        div {
                                            key: "{id}",
                                            class: "border border-base-300 rounded-lg p-4 flex flex-col gap-2",
                                            style: "border-left: 4px solid {panel.color}",
                                            div {
                                                class: "flex items-center justify-between",
                                                span { class: "font-semibold", "{panel.title}" }
                                                if panel.message_id.is_some() {
                                                    span { class: "badge badge-success", "Posted" }
                                                } else {
                                                    span { class: "badge badge-ghost", "Not posted" }
                                                }
                                            }
                                            p { class: "text-sm opacity-70", "{panel.description}" }
                                            p { class: "text-xs opacity-60", "{panel.ticket_counter} tickets · #{panel.channel_id}" }
                                            div {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-outline btn-xs",
                                                    disabled: processing(),
                                                    onclick: move |_| {
                                                        processing.set(true);

                                                        #[cfg(feature = "web")]
                                                        spawn(async move {
                                                            match api::ticket::send_panel(guild_id, id).await {
                                                                Ok(_) => toaster.success("Panel sent"),
                                                                Err(err) => toaster.error(err.message),
                                                            }
                                                            processing.set(false);
                                                            bump(refetch);
                                                        });
                                                    },
                                                    "Send"
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-xs",
                                                    onclick: move |_| {
                                                        editing.set(Some(id));
                                                        form.set(edit_form.clone());
                                                        show_form.set(true);
                                                    },
                                                    "Edit"
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
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "No panels yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        Modal {
            show: show_form,
            title: form_title,
            prevent_close: processing(),
            wide: true,
            form {
                class: "grid gap-4 md:grid-cols-2",
                onsubmit: submit,
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Panel channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&current.channel_id),
                        on_change: move |ids: Vec<String>| form.write().channel_id = first(ids),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Ticket category" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Category,
                        placeholder: "No category",
                        selected: single(&current.ticket_category),
                        on_change: move |ids: Vec<String>| form.write().ticket_category = first(ids),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Title" }
                    input {
                        class: "input input-bordered",
                        value: "{current.title}",
                        oninput: move |e| form.write().title = e.value(),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Color" }
                    input {
                        r#type: "color",
                        class: "input input-bordered",
                        value: "{current.color}",
                        oninput: move |e| form.write().color = e.value(),
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Description" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{current.description}",
                        oninput: move |e| form.write().description = e.value(),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Button label" }
                    input {
                        class: "input input-bordered",
                        value: "{current.button_label}",
                        oninput: move |e| form.write().button_label = e.value(),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Button emoji" }
                    input {
                        class: "input input-bordered",
                        value: "{current.button_emoji}",
                        oninput: move |e| form.write().button_emoji = e.value(),
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Channel name template" }
                    input {
                        class: "input input-bordered",
                        value: "{current.ticket_name_template}",
                        oninput: move |e| form.write().ticket_name_template = e.value(),
                    }
                    span { class: "text-xs opacity-60", "Placeholders: {{number}}, {{user}}" }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Support roles" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Role,
                        multiple: true,
                        selected: current.support_roles.clone(),
                        on_change: move |ids: Vec<String>| form.write().support_roles = ids,
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Roles pinged on new tickets" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Role,
                        multiple: true,
                        selected: current.ping_roles.clone(),
                        on_change: move |ids: Vec<String>| form.write().ping_roles = ids,
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.claim_enabled,
                        onchange: move |e| form.write().claim_enabled = e.checked(),
                    }
                    span { "Allow claiming" }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.transcript_enabled,
                        onchange: move |e| form.write().transcript_enabled = e.checked(),
                    }
                    span { "Save transcripts" }
                }
                div {
                    class: "modal-action md:col-span-2",
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
                        if processing() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Save"
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete panel",
            message: "The panel message stops opening tickets. Existing tickets are kept.",
            is_processing: processing(),
            on_confirm: move |_| {
                let Some(id) = to_delete() else {
                    return;
                };
                processing.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::ticket::delete_panel(guild_id, id).await {
                        Ok(()) => toaster.success("Panel deleted"),
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
fn TicketList(guild_id: u64, refetch: Signal<u32>) -> Element {
    let mut toaster = use_context::<Toaster>();
    let user = use_context::<Signal<UserState>>();
    let tickets = use_signal(|| None::<TicketListDto>);
    let mut filter = use_signal(|| "all".to_string());

    #[cfg(feature = "web")]
    use_fetch(refetch, tickets, move || {
        let status = status_query(&filter());
        async move { api::ticket::get_tickets(guild_id, status.as_deref()).await }
    });

    // Actions taken from the dashboard are attributed to the dashboard account
    let actor = user()
        .user
        .map(|user| user.username)
        .unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Tickets" }
                    div {
                        class: "join",
                        for status in STATUS_FILTERS {
                            button {
                                class: if filter() == status { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" },
                                onclick: move |_| filter.set(status.to_string()),
                                "{status}"
                            }
                        }
                    }
                }
                match tickets() {
                    Some(list) if !list.tickets.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "#" } th { "User" } th { "Status" } th { "Claimed by" } th { "Opened" } th {} } }
                            tbody {
                                for ticket in list.tickets {
                                    {
                                        let id = ticket.id;
                                        let claim_actor = actor.clone();
                                        let close_actor = actor.clone();
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td { "{ticket.number}" }
                                                td { "{ticket.user_id}" }
                                                td { span { class: status_badge(&ticket.status), "{ticket.status}" } }
                                                td { {ticket.claimed_by.clone().unwrap_or_else(|| "-".to_string())} }
                                                td { {short_time(&ticket.created_at)} }
                                                td {
                                                    class: "flex gap-2 justify-end",
                                                    if ticket.status == "open" {
                                                        button {
                                                            class: "btn btn-outline btn-xs",
                                                            onclick: move |_| {
                                                                let actor = claim_actor.clone();

                                                                #[cfg(feature = "web")]
                                                                spawn(async move {
                                                                    match api::ticket::claim_ticket(guild_id, id, &actor).await {
                                                                        Ok(_) => toaster.success("Ticket claimed"),
                                                                        Err(err) => toaster.error(err.message),
                                                                    }
                                                                    bump(refetch);
                                                                });

                                                                #[cfg(not(feature = "web"))]
                                                                let _ = actor;
                                                            },
                                                            "Claim"
                                                        }
                                                    }
                                                    if ticket.status != "closed" {
                                                        button {
                                                            class: "btn btn-error btn-xs",
                                                            onclick: move |_| {
                                                                let actor = close_actor.clone();

                                                                #[cfg(feature = "web")]
                                                                spawn(async move {
                                                                    match api::ticket::close_ticket(guild_id, id, &actor).await {
                                                                        Ok(_) => toaster.success("Ticket closed"),
                                                                        Err(err) => toaster.error(err.message),
                                                                    }
                                                                    bump(refetch);
                                                                });

                                                                #[cfg(not(feature = "web"))]
                                                                let _ = actor;
                                                            },
                                                            "Close"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "No tickets" } },
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
    fn all_filter_sends_no_status() {
        assert_eq!(status_query("all"), None);
        assert_eq!(status_query("claimed").as_deref(), Some("claimed"));
    }

    #[test]
    fn create_payload_omits_empty_category() {
        let form = PanelForm {
            channel_id: "10".to_string(),
            support_roles: vec!["5".to_string()],
            ..Default::default()
        };

        let payload = form.into_create();

        assert_eq!(payload.channel_id, "10");
        assert_eq!(payload.ticket_category, None);
        assert_eq!(payload.support_roles, Some(vec!["5".to_string()]));
        assert_eq!(payload.categories, None);
    }
}
