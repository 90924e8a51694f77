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

#[component]
pub fn Ai() -> Element {
    let guild_id = use_guild_id();

    rsx! {
        Title { "AI | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "AI Chat" }
            match guild_id {
                Some(guild_id) => rsx! { AiSettings { guild_id } },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn AiSettings(guild_id: u64) -> Element {
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
            ai_enabled: Some(current.ai_enabled),
            ai_channel: Some(current.ai_channel),
            ai_system_prompt: Some(current.ai_system_prompt),
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
                p {
                    class: "text-sm opacity-60",
                    "Messages in the AI channel are answered by the configured OpenAI model."
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: current.ai_enabled,
                        onchange: move |e| edit_settings(settings, |s| s.ai_enabled = e.checked()),
                    }
                    span { "Enabled" }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&current.ai_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.ai_channel = first(ids)),
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "System prompt" }
                    textarea {
                        class: "textarea textarea-bordered",
                        rows: "6",
                        value: "{current.ai_system_prompt}",
                        oninput: move |e| edit_settings(settings, |s| s.ai_system_prompt = e.value()),
                    }
                }
                div {
                    class: "flex justify-end",
                    button { class: "btn btn-primary", onclick: save, "Save" }
                }
            }
        }
    }
}
