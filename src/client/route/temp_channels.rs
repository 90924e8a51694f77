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
        store::toast::Toaster,
    },
    model::temp_channel::{
        CreateTempCreatorDto, TempChannelListDto, TempCreatorDto, TempCreatorListDto,
        UpdateTempCreatorDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

const NUMBERING_TYPES: [(&str, &str); 5] = [
    ("number", "1, 2, 3"),
    ("letter", "A, B, C"),
    ("superscript", "¹, ², ³"),
    ("subscript", "₁, ₂, ₃"),
    ("roman", "I, II, III"),
];

/// Editable state of the creator dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatorForm {
    pub channel_id: String,
    pub category_id: String,
    pub name_template: String,
    pub numbering_type: String,
    pub position: String,
    pub default_limit: i32,
    pub default_bitrate: i32,
    pub allow_rename: bool,
    pub allow_limit: bool,
    pub allow_lock: bool,
    pub allow_hide: bool,
    pub allow_kick: bool,
    pub allow_permit: bool,
    pub allow_bitrate: bool,
}

impl Default for CreatorForm {
    fn default() -> Self {
        Self {
            channel_id: String::new(),
            category_id: String::new(),
            name_template: "🔊 {user}'s channel".to_string(),
            numbering_type: "number".to_string(),
            position: "bottom".to_string(),
            default_limit: 0,
            default_bitrate: 64000,
            allow_rename: true,
            allow_limit: true,
            allow_lock: true,
            allow_hide: true,
            allow_kick: true,
            allow_permit: true,
            allow_bitrate: true,
        }
    }
}

impl CreatorForm {
    pub fn from_creator(creator: &TempCreatorDto) -> Self {
        Self {
            channel_id: creator.channel_id.clone(),
            category_id: creator.category_id.clone().unwrap_or_default(),
            name_template: creator.name_template.clone(),
            numbering_type: creator.numbering_type.clone(),
            position: creator.position.clone(),
            default_limit: creator.default_limit,
            default_bitrate: creator.default_bitrate,
            allow_rename: creator.allow_rename,
            allow_limit: creator.allow_limit,
            allow_lock: creator.allow_lock,
            allow_hide: creator.allow_hide,
            allow_kick: creator.allow_kick,
            allow_permit: creator.allow_permit,
            allow_bitrate: creator.allow_bitrate,
        }
    }

    pub fn into_create(self) -> CreateTempCreatorDto {
        CreateTempCreatorDto {
            channel_id: self.channel_id,
            category_id: Some(self.category_id).filter(|id| !id.is_empty()),
            name_template: Some(self.name_template),
            numbering_type: Some(self.numbering_type),
            position: Some(self.position),
            default_limit: Some(self.default_limit),
            default_bitrate: Some(self.default_bitrate),
            allow_rename: Some(self.allow_rename),
            allow_limit: Some(self.allow_limit),
            allow_lock: Some(self.allow_lock),
            allow_hide: Some(self.allow_hide),
            allow_kick: Some(self.allow_kick),
            allow_permit: Some(self.allow_permit),
            allow_bitrate: Some(self.allow_bitrate),
        }
    }

    /// Full update; an empty category is sent as `""` so the server clears it.
    pub fn into_update(self) -> UpdateTempCreatorDto {
        UpdateTempCreatorDto {
            channel_id: Some(self.channel_id),
            category_id: Some(self.category_id),
            name_template: Some(self.name_template),
            numbering_type: Some(self.numbering_type),
            position: Some(self.position),
            default_limit: Some(self.default_limit),
            default_bitrate: Some(self.default_bitrate),
            allow_rename: Some(self.allow_rename),
            allow_limit: Some(self.allow_limit),
            allow_lock: Some(self.allow_lock),
            allow_hide: Some(self.allow_hide),
            allow_kick: Some(self.allow_kick),
            allow_permit: Some(self.allow_permit),
            allow_bitrate: Some(self.allow_bitrate),
        }
    }
}

#[component]
pub fn TempChannels() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "Temp Channels | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Temp Channels" }
            match guild_id {
                Some(guild_id) => rsx! {
                    Creators { guild_id }
                    ActiveChannels { guild_id }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn Creators(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let creators = use_signal(|| None::<TempCreatorListDto>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<i32>);
    let mut form = use_signal(CreatorForm::default);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<i32>);
    let mut processing = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, creators, move || api::temp_channel::get_temp_creators(guild_id));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if current.channel_id.is_empty() {
            toaster.error("Select the voice channel users join");
            return;
        }
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match editing() {
                Some(id) => {
                    api::temp_channel::update_temp_creator(guild_id, id, current.into_update())
                        .await
                }
                None => {
                    api::temp_channel::create_temp_creator(guild_id, current.into_create()).await
                }
            };
            match result {
                Ok(_) => {
                    toaster.success("Creator saved");
                    show_form.set(false);
                    bump(refetch);
                }
                Err(err) => toaster.error(err.message),
            }
            processing.set(false);
        });
    };

    let current = form();
    let form_title = if editing().is_some() { "Edit creator" } else { "New creator" }.to_string();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Join to create channels" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            editing.set(None);
                            form.set(CreatorForm::default());
                            show_form.set(true);
                        },
                        "New creator"
                    }
                }
                match creators() {
                    Some(list) if !list.creators.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Channel" } th { "Name template" } th { "Numbering" } th { "Limit" } th {} } }
                            tbody {
                                for creator in list.creators {
                                    {
                                        let id = creator.id;
                                        let edit_form = CreatorForm::from_creator(&creator);
                                        rsx! {
                                            tr {
                                                key: "{id}",
                                                td { "{creator.channel_id}" }
                                                td { "{creator.name_template}" }
                                                td { "{creator.numbering_type}" }
                                                td {
                                                    if creator.default_limit == 0 { "∞" } else { "{creator.default_limit}" }
                                                }
                                                td {
                                                    class: "flex gap-2 justify-end",
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
                        }
                    },
                    Some(_) => rsx! { p { class: "opacity-50", "No creators configured" } },
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
                    span { class: "label-text", "Creator channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::VoiceChannel,
                        selected: single(&current.channel_id),
                        on_change: move |ids: Vec<String>| form.write().channel_id = first(ids),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Category" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::Category,
                        placeholder: "Same as creator",
                        selected: single(&current.category_id),
                        on_change: move |ids: Vec<String>| form.write().category_id = first(ids),
                    }
                }
                label {
                    class: "flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Name template" }
                    input {
                        class: "input input-bordered",
                        value: "{current.name_template}",
                        oninput: move |e| form.write().name_template = e.value(),
                    }
                    span { class: "text-xs opacity-60", "Placeholders: {{user}}, {{number}}" }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Numbering" }
                    select {
                        class: "select select-bordered",
                        value: "{current.numbering_type}",
                        onchange: move |e| form.write().numbering_type = e.value(),
                        for (value, example) in NUMBERING_TYPES {
                            option { value, "{value} ({example})" }
                        }
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Position" }
                    select {
                        class: "select select-bordered",
                        value: "{current.position}",
                        onchange: move |e| form.write().position = e.value(),
                        option { value: "top", "Above the creator" }
                        option { value: "bottom", "Below the creator" }
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "User limit (0 = none)" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "99",
                        class: "input input-bordered",
                        value: "{current.default_limit}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                form.write().default_limit = value;
                            }
                        },
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Bitrate (bps)" }
                    input {
                        r#type: "number",
                        min: "8000",
                        step: "1000",
                        class: "input input-bordered",
                        value: "{current.default_bitrate}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i32>() {
                                form.write().default_bitrate = value;
                            }
                        },
                    }
                }
                div {
                    class: "md:col-span-2 grid grid-cols-2 md:grid-cols-4 gap-2",
                    PermissionToggle { label: "Rename", checked: current.allow_rename, on_change: move |v| form.write().allow_rename = v }
                    PermissionToggle { label: "Limit", checked: current.allow_limit, on_change: move |v| form.write().allow_limit = v }
                    PermissionToggle { label: "Lock", checked: current.allow_lock, on_change: move |v| form.write().allow_lock = v }
                    PermissionToggle { label: "Hide", checked: current.allow_hide, on_change: move |v| form.write().allow_hide = v }
                    PermissionToggle { label: "Kick", checked: current.allow_kick, on_change: move |v| form.write().allow_kick = v }
                    PermissionToggle { label: "Permit", checked: current.allow_permit, on_change: move |v| form.write().allow_permit = v }
                    PermissionToggle { label: "Bitrate", checked: current.allow_bitrate, on_change: move |v| form.write().allow_bitrate = v }
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
            title: "Delete creator",
            message: "Channels already created stay until they empty out.",
            is_processing: processing(),
            on_confirm: move |_| {
                let Some(id) = to_delete() else {
                    return;
                };
                processing.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::temp_channel::delete_temp_creator(guild_id, id).await {
                        Ok(()) => toaster.success("Creator deleted"),
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
fn PermissionToggle(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "label cursor-pointer justify-start gap-2",
            input {
                r#type: "checkbox",
                class: "checkbox checkbox-sm",
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
            span { class: "label-text", "{label}" }
        }
    }
}

#[component]
fn ActiveChannels(guild_id: u64) -> Element {
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let channels = use_signal(|| None::<TempChannelListDto>);

    #[cfg(feature = "web")]
    use_fetch(refetch, channels, move || api::temp_channel::get_temp_channels(guild_id));

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Active channels" }
                match channels() {
                    Some(list) if !list.channels.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Name" } th { "Owner" } th { "Created" } th {} } }
                            tbody {
                                for channel in list.channels {
                                    {
                                        let channel_id = channel.channel_id.clone();
                                        rsx! {
                                            tr {
                                                key: "{channel.channel_id}",
                                                td { "{channel.name}" }
                                                td { "{channel.owner_id}" }
                                                td { {short_time(&channel.created_at)} }
                                                td {
                                                    class: "text-right",
                                                    button {
                                                        class: "btn btn-error btn-xs",
                                                        onclick: move |_| {
                                                            let channel_id = channel_id.clone();

                                                            #[cfg(feature = "web")]
                                                            spawn(async move {
                                                                match api::temp_channel::delete_temp_channel(guild_id, &channel_id).await {
                                                                    Ok(()) => toaster.success("Channel removed"),
                                                                    Err(err) => toaster.error(err.message),
                                                                }
                                                                bump(refetch);
                                                            });

                                                            #[cfg(not(feature = "web"))]
                                                            let _ = channel_id;
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
                    Some(_) => rsx! { p { class: "opacity-50", "No temporary channels right now" } },
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
    fn create_payload_drops_empty_category() {
        let form = CreatorForm {
            channel_id: "42".to_string(),
            ..Default::default()
        };

        let payload = form.into_create();

        assert_eq!(payload.channel_id, "42");
        assert_eq!(payload.category_id, None);
        assert_eq!(payload.numbering_type.as_deref(), Some("number"));
    }

    #[test]
    fn update_payload_clears_category_with_empty_string() {
        let form = CreatorForm {
            channel_id: "42".to_string(),
            ..Default::default()
        };

        let payload = form.into_update();

        assert_eq!(payload.category_id.as_deref(), Some(""));
        assert_eq!(payload.allow_kick, Some(true));
    }
}
