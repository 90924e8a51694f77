use dioxus::prelude::*;

use crate::client::{
    component::ToastRegion,
    constant::SITE_NAME,
    router::Route,
    store::{guild::GuildState, toast::Toaster, user::UserState},
};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_me, store::user::stored_token};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const DAISY_UI: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let user_store = use_context_provider(|| Signal::new(UserState::from_storage()));
    use_context_provider(|| Signal::new(GuildState::from_storage()));
    use_context_provider(Toaster::new);

    // Check the stored token once on load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let mut user_store = user_store;
        if stored_token().is_none() {
            user_store.write().sign_out();
            return;
        }

        match get_me().await {
            Ok(user) => user_store.write().set_user(user),
            Err(err) if err.status == 401 => user_store.write().sign_out(),
            Err(err) => {
                // Keep the stored user when the server is unreachable
                tracing::error!("Failed to fetch current user: {}", err);
                user_store.write().fetched = true;
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Dashboard for the multi-feature Discord bot"
        }
        document::Link { rel: "stylesheet", href: DAISY_UI }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
        // Shared by every route, /auth included
        ToastRegion {}
    }
}
