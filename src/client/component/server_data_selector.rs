use dioxus::prelude::*;

use crate::{
    client::model::selector::{self, SelectorKind},
    model::server_data::ServerDataDto,
};

#[cfg(feature = "web")]
use crate::client::{api, store::toast::Toaster};

/// Picker for roles, channels, categories or emojis of the selected guild.
///
/// The cached server data is fetched the first time the picker opens.
#[component]
pub fn ServerDataSelector(
    guild_id: Option<u64>,
    kind: SelectorKind,
    /// Ids currently selected, at most one in single mode
    selected: Vec<String>,
    on_change: EventHandler<Vec<String>>,
    #[props(default = false)] multiple: bool,
    #[props(default)] placeholder: Option<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let data = use_signal(|| None::<ServerDataDto>);
    let loading = use_signal(|| false);
    #[cfg(feature = "web")]
    let toaster = use_context::<Toaster>();

    let disabled = guild_id.is_none();
    let placeholder = placeholder.unwrap_or_else(|| format!("Select {}", kind.noun()));

    let options = data
        .read()
        .as_ref()
        .map(|data| selector::options(data, kind))
        .unwrap_or_default();
    let label = selector::trigger_label(&selected, &options, &placeholder);
    let visible = selector::filter(&options, &query());

    let mut load = move || {
        #[cfg(feature = "web")]
        {
            let (Some(guild_id), mut data, mut loading) = (guild_id, data, loading) else {
                return;
            };
            if data.read().is_some() || loading() {
                return;
            }
            let mut toaster = toaster;
            loading.set(true);
            spawn(async move {
                match api::server_data::get_server_data(guild_id).await {
                    Ok(fetched) => data.set(Some(fetched)),
                    Err(err) => toaster.error(err.message),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "relative w-full",
            button {
                r#type: "button",
                class: "btn btn-outline w-full justify-between font-normal",
                disabled,
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                    if next {
                        query.set(String::new());
                        load();
                    }
                },
                span { class: "truncate", "{label}" }
                span { class: "opacity-50", "▾" }
            }

            if open() {
                // Click outside to close
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "absolute z-10 w-full mt-1 bg-base-100 border border-base-300 rounded-lg shadow-lg",
                    input {
                        r#type: "text",
                        class: "input input-bordered input-sm w-full",
                        placeholder: "Search by name or id",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    div {
                        class: "max-h-60 overflow-y-auto",
                        if loading() {
                            div {
                                class: "px-4 py-2 text-center",
                                span { class: "loading loading-spinner loading-sm" }
                            }
                        } else if visible.is_empty() {
                            div {
                                class: "px-4 py-2 text-center opacity-50 text-sm",
                                if query().is_empty() { "No items available" } else { "No matches found" }
                            }
                        } else {
                            for option in visible {
                                {
                                    let is_selected = selected.contains(&option.id);
                                    let id = option.id.clone();
                                    let current = selected.clone();
                                    rsx! {
                                        div {
                                            key: "{option.id}",
                                            class: if is_selected {
                                                "flex items-center gap-2 px-4 py-2 cursor-pointer bg-primary text-primary-content"
                                            } else {
                                                "flex items-center gap-2 px-4 py-2 cursor-pointer hover:bg-base-200"
                                            },
                                            onmousedown: move |evt| {
                                                evt.prevent_default();
                                                on_change.call(selector::toggle(&current, &id, multiple));
                                                if !multiple {
                                                    open.set(false);
                                                }
                                            },
                                            OptionAccent { kind, accent: option.accent.clone() }
                                            span { class: "truncate", "{option.name}" }
                                            span { class: "ml-auto text-xs opacity-50", "{option.id}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionAccent(kind: SelectorKind, accent: Option<String>) -> Element {
    let Some(accent) = accent else {
        return rsx! {};
    };

    if kind == SelectorKind::Emoji {
        rsx! { img { class: "w-5 h-5", src: "{accent}" } }
    } else {
        rsx! {
            span {
                class: "w-3 h-3 rounded-full",
                style: "background-color: {accent}",
            }
        }
    }
}
