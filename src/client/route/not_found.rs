use dioxus::prelude::*;

use crate::client::{component::ErrorPage, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        div {
            class: "flex flex-col items-center",
            ErrorPage { status: 404, message: format!("Nothing lives at /{}", path) }
            Link { to: Route::Dashboard {}, class: "btn btn-outline", "Back to dashboard" }
        }
    }
}
