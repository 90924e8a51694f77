use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_guild_id, Page},
        constant::SITE_NAME,
        hook::{edit_settings, use_guild_settings},
        store::{toast::Toaster, user::UserState},
    },
    model::guild::UpdateGuildConfigDto,
};

#[cfg(feature = "web")]
use crate::{
    client::{api, hook::save_settings},
    model::bot::ConfigureBotDto,
};

#[component]
pub fn Settings() -> Element {
    let guild_id = use_guild_id();
    let is_admin = use_context::<Signal<UserState>>().read().is_admin();

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Settings" }
            if is_admin {
                Credentials {}
            }
            if let Some(guild_id) = guild_id {
                GeneralSettings { guild_id }
            } else {
                p { class: "opacity-60", "Select a server on the dashboard to edit its language & prefix." }
            }
        }
    }
}

/// Bot token & OpenAI key. Blank fields keep the stored value.
#[component]
fn Credentials() -> Element {
    let mut toaster = use_context::<Toaster>();
    let mut discord_token = use_signal(String::new);
    let mut openai_key = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        busy.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = ConfigureBotDto {
                discord_token: Some(discord_token()),
                openai_api_key: Some(openai_key()),
            };
            match api::bot::configure(payload).await {
                Ok(result) if result.success => {
                    toaster.success(result.message);
                    discord_token.set(String::new());
                    openai_key.set(String::new());
                }
                Ok(result) => toaster.error(result.message),
                Err(err) => toaster.error(err.message),
            }
            busy.set(false);
        });
    };

    let test = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            match api::bot::test().await {
                Ok(result) if result.success => {
                    toaster.success(result.message.unwrap_or_else(|| "Configuration OK".to_string()))
                }
                Ok(result) => toaster.error(result.issues.join(", ")),
                Err(err) => toaster.error(err.message),
            }
        });
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Credentials" }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: save,
                    input {
                        r#type: "password",
                        class: "input input-bordered",
                        placeholder: "Discord bot token",
                        value: "{discord_token}",
                        oninput: move |e| discord_token.set(e.value()),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered",
                        placeholder: "OpenAI API key",
                        value: "{openai_key}",
                        oninput: move |e| openai_key.set(e.value()),
                    }
                    div {
                        class: "flex justify-end gap-2",
                        button { r#type: "button", class: "btn btn-outline", onclick: test, "Test configuration" }
                        button { r#type: "submit", class: "btn btn-primary", disabled: busy(), "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn GeneralSettings(guild_id: u64) -> Element {
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
            language: Some(current.language),
            prefix: Some(current.prefix),
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
                h2 { class: "card-title md:col-span-2", "Server" }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Language" }
                    select {
                        class: "select select-bordered",
                        value: "{current.language}",
                        onchange: move |e| edit_settings(settings, |s| s.language = e.value()),
                        option { value: "de", "Deutsch" }
                        option { value: "en", "English" }
                    }
                }
                label {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Command prefix" }
                    input {
                        class: "input input-bordered",
                        maxlength: 5,
                        value: "{current.prefix}",
                        oninput: move |e| edit_settings(settings, |s| s.prefix = e.value()),
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
