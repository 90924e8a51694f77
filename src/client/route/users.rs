use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Page},
        constant::SITE_NAME,
        hook::{bump, use_refetch},
        model::format::short_time,
        store::{toast::Toaster, user::UserState},
    },
    model::auth::DashboardUserListDto,
};

#[cfg(feature = "web")]
use crate::client::{api, hook::use_fetch};

#[component]
pub fn Users() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let mut toaster = use_context::<Toaster>();
    let refetch = use_refetch();
    let users = use_signal(|| None::<DashboardUserListDto>);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    let mut show_delete_modal = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    use_fetch(refetch, users, api::auth::get_users);

    let current_user_id = user_store.read().user.as_ref().map(|user| user.id);

    rsx! {
        Title { "Users | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6",
            h1 { class: "text-2xl", "Users" }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Created" }
                                th { "Admin" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for user in users().map(|list| list.users).unwrap_or_default() {
                                {
                                    let user_id = user.id;
                                    let is_admin = user.is_admin;
                                    let username = user.username.clone();
                                    let is_current_user = Some(user_id) == current_user_id;
                                    rsx! {
                                        tr {
                                            key: "{user_id}",
                                            td {
                                                div {
                                                    class: "flex items-center gap-2",
                                                    span { "{user.username}" }
                                                    if is_current_user {
                                                        span { class: "badge badge-sm badge-primary", "You" }
                                                    }
                                                }
                                            }
                                            td { "{user.email}" }
                                            td { {short_time(&user.created_at)} }
                                            td {
                                                input {
                                                    r#type: "checkbox",
                                                    class: "toggle toggle-sm",
                                                    checked: is_admin,
                                                    disabled: is_current_user,
                                                    onchange: move |_| {
                                                        #[cfg(feature = "web")]
                                                        spawn(async move {
                                                            match api::auth::set_admin(user_id, !is_admin).await {
                                                                Ok(result) => toaster.success(result.message),
                                                                Err(err) => toaster.error(err.message),
                                                            }
                                                            bump(refetch);
                                                        });
                                                    },
                                                }
                                            }
                                            td {
                                                div {
                                                    class: "flex justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        disabled: is_current_user,
                                                        onclick: move |_| {
                                                            to_delete.set(Some((user_id, username.clone())));
                                                            show_delete_modal.set(true);
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
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete user",
            message: format!(
                "Delete the account of \"{}\"? Their sessions end immediately.",
                to_delete().map(|(_, name)| name).unwrap_or_default()
            ),
            is_processing: deleting(),
            on_confirm: move |_| {
                let Some((user_id, _)) = to_delete() else {
                    return;
                };
                deleting.set(true);

                #[cfg(feature = "web")]
                spawn(async move {
                    match api::auth::delete_user(user_id).await {
                        Ok(()) => toaster.success("User deleted"),
                        Err(err) => toaster.error(err.message),
                    }
                    deleting.set(false);
                    show_delete_modal.set(false);
                    bump(refetch);
                });
            },
        }
    }
}
