use chrono::Utc;
use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::{
        component::{
            parse_schedule, use_guild_id, ConfirmationModal, GuildRequired, Page,
            ServerDataSelector, UtcDateTimeInput,
        },
        constant::SITE_NAME,
        hook::{bump, edit_settings, use_guild_settings, use_refetch},
        model::{
            format::short_time,
            selector::{first, single, SelectorKind},
        },
        store::toast::Toaster,
    },
    model::{
        guild::UpdateGuildConfigDto,
        news::{CreateNewsDto, NewsListDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api,
    hook::{save_settings, use_fetch},
};

/// Renders Discord flavoured markdown to HTML for the preview pane.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn News() -> Element {
    let guild_id = use_guild_id();
    let refetch = use_refetch();

    rsx! {
        Title { "News | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "News" }
            match guild_id {
                Some(guild_id) => rsx! {
                    NewsChannel { guild_id }
                    Compose { guild_id, refetch }
                    NewsList { guild_id, refetch }
                },
                None => rsx! { GuildRequired {} },
            }
        }
    }
}

#[component]
fn NewsChannel(guild_id: u64) -> Element {
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
            news_channel: Some(current.news_channel),
            ..Default::default()
        };

        #[cfg(feature = "web")]
        spawn(save_settings(guild_id, update, settings, toaster));
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex-row items-end gap-4",
                label {
                    class: "flex flex-col gap-1 grow",
                    span { class: "label-text", "News channel" }
                    ServerDataSelector {
                        guild_id,
                        kind: SelectorKind::TextChannel,
                        selected: single(&current.news_channel),
                        on_change: move |ids: Vec<String>| edit_settings(settings, |s| s.news_channel = first(ids)),
                    }
                }
                button { class: "btn btn-primary", onclick: save, "Save" }
            }
        }
    }
}

#[component]
fn Compose(guild_id: u64, refetch: Signal<u32>) -> Element {
    let mut toaster = use_context::<Toaster>();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut schedule = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if title().trim().is_empty() || content().trim().is_empty() {
            toaster.error("Title and content are required");
            return;
        }
        let scheduled_for = match parse_schedule(&schedule(), Utc::now()) {
            Ok(scheduled) => scheduled.map(|at| at.to_rfc3339()),
            Err(message) => {
                toaster.error(message);
                return;
            }
        };
        let payload = CreateNewsDto {
            title: title().trim().to_string(),
            content: content(),
            scheduled_for,
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match api::news::create_news(guild_id, payload).await {
                Ok(news) => {
                    let message = if news.scheduled_for.is_some() {
                        "News scheduled"
                    } else {
                        "News queued for posting"
                    };
                    toaster.success(message);
                    title.set(String::new());
                    content.set(String::new());
                    schedule.set(String::new());
                    bump(refetch);
                }
                Err(err) => toaster.error(err.message),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let preview = render_markdown(&content());

    rsx! {
        div {
            class: "card bg-base-200",
            form {
                class: "card-body grid gap-4 lg:grid-cols-2",
                onsubmit: submit,
                h2 { class: "card-title lg:col-span-2", "Compose" }
                div {
                    class: "flex flex-col gap-4",
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
                        span { class: "label-text", "Content (markdown)" }
                        textarea {
                            class: "textarea textarea-bordered h-48 font-mono",
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
                        }
                    }
                    label {
                        class: "flex flex-col gap-1",
                        span { class: "label-text", "Schedule (UTC, empty posts right away)" }
                        UtcDateTimeInput { value: schedule, disabled: submitting() }
                    }
                }
                div {
                    class: "flex flex-col gap-1",
                    span { class: "label-text", "Preview" }
                    div {
                        class: "prose max-w-none bg-base-100 rounded-lg p-4 min-h-48",
                        h3 { "{title}" }
                        div { dangerous_inner_html: "{preview}" }
                    }
                }
                div {
                    class: "lg:col-span-2 flex justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Publish"
                    }
                }
            }
        }
    }
}

#[component]
fn NewsList(guild_id: u64, refetch: Signal<u32>) -> Element {
    let mut toaster = use_context::<Toaster>();
    let news = use_signal(|| None::<NewsListDto>);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<String>);
    let mut deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, news, move || api::news::get_news(guild_id));

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Entries" }
                match news() {
                    Some(list) if !list.news.is_empty() => rsx! {
                        table {
                            class: "table table-sm",
                            thead { tr { th { "Title" } th { "Scheduled" } th { "Status" } th { "Created" } th {} } }
                            tbody {
                                for entry in list.news {
                                    {
                                        let id = entry.id.clone();
                                        rsx! {
                                            tr {
                                                key: "{entry.id}",
                                                td { "{entry.title}" }
                                                td {
                                                    {entry.scheduled_for.as_ref().map(short_time).unwrap_or_else(|| "-".to_string())}
                                                }
                                                td {
                                                    if entry.posted {
                                                        span { class: "badge badge-success", "Posted" }
                                                    } else {
                                                        span { class: "badge badge-warning", "Pending" }
                                                    }
                                                }
                                                td { {short_time(&entry.created_at)} }
                                                td {
                                                    class: "text-right",
                                                    button {
                                                        class: "btn btn-error btn-xs",
                                                        onclick: move |_| {
                                                            to_delete.set(Some(id.clone()));
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
                    Some(_) => rsx! { p { class: "opacity-50", "No news yet" } },
                    None => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete news",
            message: "Posted messages stay in the channel.",
            is_processing: deleting(),
            on_confirm: move |_| {
                let Some(id) = to_delete() else {
                    return;
                };
                deleting.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::news::delete_news(guild_id, &id).await {
                        Ok(()) => toaster.success("News deleted"),
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

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**bold** and ~~gone~~");

        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }
}
