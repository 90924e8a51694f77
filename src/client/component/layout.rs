//! Dashboard shell: sidebar navigation, bot status badge & user menu.

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaChartLine, FaDice, FaDoorOpen, FaFaceSmile, FaGauge, FaGear, FaKey, FaMicrophone,
        FaNewspaper, FaRobot, FaShieldHalved, FaTerminal, FaTicket, FaUsers,
    },
    Icon,
};

use crate::{
    client::{constant::SITE_NAME, router::Route, store::user::UserState},
    model::bot::BotStatusDto,
};

#[cfg(feature = "web")]
use crate::client::{api, constant::STATUS_POLL_MS};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Layout() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let is_admin = user_store.read().is_admin();

    rsx! {
        div {
            class: "flex min-h-screen",
            aside {
                class: "w-60 shrink-0 bg-base-200 flex flex-col",
                div {
                    class: "p-4 text-xl font-bold",
                    {SITE_NAME}
                }
                ul {
                    class: "menu w-full gap-1",
                    NavItem { to: Route::Dashboard {}, label: "Dashboard", Icon { width: 16, height: 16, icon: FaGauge } }
                    NavItem { to: Route::Moderation {}, label: "Moderation", Icon { width: 16, height: 16, icon: FaShieldHalved } }
                    NavItem { to: Route::Permissions {}, label: "Permissions", Icon { width: 16, height: 16, icon: FaKey } }
                    NavItem { to: Route::TempChannels {}, label: "Temp Channels", Icon { width: 16, height: 16, icon: FaMicrophone } }
                    NavItem { to: Route::ReactionRoles {}, label: "Reaction Roles", Icon { width: 16, height: 16, icon: FaFaceSmile } }
                    NavItem { to: Route::Games {}, label: "Games", Icon { width: 16, height: 16, icon: FaDice } }
                    NavItem { to: Route::Tickets {}, label: "Tickets", Icon { width: 16, height: 16, icon: FaTicket } }
                    NavItem { to: Route::Leveling {}, label: "Leveling", Icon { width: 16, height: 16, icon: FaChartLine } }
                    NavItem { to: Route::Welcome {}, label: "Welcome", Icon { width: 16, height: 16, icon: FaDoorOpen } }
                    NavItem { to: Route::Commands {}, label: "Commands", Icon { width: 16, height: 16, icon: FaTerminal } }
                    NavItem { to: Route::Ai {}, label: "AI", Icon { width: 16, height: 16, icon: FaRobot } }
                    NavItem { to: Route::News {}, label: "News", Icon { width: 16, height: 16, icon: FaNewspaper } }
                    NavItem { to: Route::Settings {}, label: "Settings", Icon { width: 16, height: 16, icon: FaGear } }
                    if is_admin {
                        NavItem { to: Route::Users {}, label: "Users", Icon { width: 16, height: 16, icon: FaUsers } }
                    }
                }
            }
            div {
                class: "flex-1 flex flex-col min-w-0",
                TopBar {}
                main {
                    class: "flex-1",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: &'static str, children: Element) -> Element {
    let current: Route = use_route();
    let active = current == to;

    rsx! {
        li {
            Link {
                to,
                class: if active { "menu-active" } else { "" },
                {children}
                "{label}"
            }
        }
    }
}

/// Status badge & user menu.
#[component]
fn TopBar() -> Element {
    let mut user_store = use_context::<Signal<UserState>>();
    let status = use_signal(|| None::<BotStatusDto>);
    let nav = navigator();

    // Poll the bot status for as long as the shell is mounted
    #[cfg(feature = "web")]
    {
        let mut status = status;
        use_future(move || async move {
            loop {
                match api::bot::get_status().await {
                    Ok(current) => status.set(Some(current)),
                    Err(err) => {
                        tracing::warn!("Failed to poll bot status: {}", err);
                        status.set(None);
                    }
                }
                gloo_timers::future::TimeoutFuture::new(STATUS_POLL_MS).await;
            }
        });
    }

    let username = user_store
        .read()
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex items-center justify-between gap-4 h-16 px-4 bg-base-100 border-b border-base-300",
            div {
                class: "flex items-center gap-2",
                match status() {
                    Some(current) => rsx! {
                        span {
                            class: if current.running { "badge badge-success" } else { "badge badge-error" },
                            if current.running { "Bot online" } else { "Bot offline" }
                        }
                        span {
                            class: if current.token_configured { "badge badge-outline" } else { "badge badge-warning" },
                            if current.token_configured { "Token configured" } else { "Token missing" }
                        }
                    },
                    None => rsx! {
                        span { class: "badge badge-ghost", "Status unknown" }
                    },
                }
            }
            div {
                class: "dropdown dropdown-end",
                div {
                    tabindex: "0",
                    role: "button",
                    class: "btn btn-ghost",
                    "{username}"
                }
                ul {
                    tabindex: "0",
                    class: "dropdown-content menu bg-base-200 rounded-box z-30 w-40 p-2 shadow",
                    li {
                        button {
                            onclick: move |_| {
                                #[cfg(feature = "web")]
                                spawn(async move {
                                    // Storage is cleared even when the server call fails
                                    if let Err(err) = api::auth::logout().await {
                                        tracing::warn!("Logout request failed: {}", err);
                                    }
                                    user_store.write().sign_out();
                                    nav.push(Route::Auth {});
                                });

                                #[cfg(not(feature = "web"))]
                                {
                                    user_store.write().sign_out();
                                    nav.push(Route::Auth {});
                                }
                            },
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
