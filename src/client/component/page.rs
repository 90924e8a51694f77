use dioxus::prelude::*;

use crate::client::{router::Route, store::guild::GuildState};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "p-4 sm:p-6 w-full {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center w-full min-h-[50vh]",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-2 items-center justify-center w-full min-h-[50vh]",
            p { class: "text-4xl font-bold", "{status}" }
            p { class: "opacity-70", "{message}" }
        }
    )
}

/// Placeholder for feature pages while no guild is selected.
#[component]
pub fn GuildRequired() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-3 items-center justify-center w-full min-h-[50vh]",
            p { class: "text-lg opacity-60", "Select a server first" }
            Link {
                to: Route::Dashboard {},
                class: "btn btn-primary btn-sm",
                "Go to dashboard"
            }
        }
    }
}

/// Currently selected guild id.
pub fn use_guild_id() -> Option<u64> {
    use_context::<Signal<GuildState>>().read().guild_id
}
