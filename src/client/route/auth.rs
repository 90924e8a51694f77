use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::{toast::Toaster, user::UserState},
};

#[cfg(feature = "web")]
use crate::{
    client::api,
    model::auth::{LoginDto, RegisterDto},
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

/// Client-side checks run before a register or login request.
///
/// `username` is only checked when registering.
pub fn validate_credentials(username: Option<&str>, password: &str) -> Result<(), String> {
    if let Some(username) = username {
        if username.trim().chars().count() < MIN_USERNAME_LEN {
            return Err(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LEN
            ));
        }
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[component]
pub fn Auth() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let mut toaster = use_context::<Toaster>();
    let nav = navigator();

    let mut tab = use_signal(|| AuthTab::Login);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Logged in users have nothing to do here
    use_effect(move || {
        if user_store.read().user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let registering = tab() == AuthTab::Register;
        let name = username();
        if let Err(message) =
            validate_credentials(registering.then_some(name.as_str()), &password())
        {
            toaster.error(message);
            return;
        }

        submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut user_store = user_store;
            spawn(async move {
                let result = if registering {
                    api::auth::register(RegisterDto {
                        username: name.trim().to_string(),
                        email: email(),
                        password: password(),
                    })
                    .await
                } else {
                    api::auth::login(LoginDto {
                        email: email(),
                        password: password(),
                    })
                    .await
                };

                match result {
                    Ok(response) => {
                        toaster.success(response.message.clone());
                        user_store.write().sign_in(response);
                        nav.push(Route::Dashboard {});
                    }
                    Err(err) => toaster.error(err.message),
                }
                submitting.set(false);
            });
        }
    };

    if user_store.read().user.is_some() {
        return rsx! { LoadingPage {} };
    }

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center min-h-screen",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body gap-4",
                    h1 { class: "text-2xl text-center", {SITE_NAME} }
                    div {
                        role: "tablist",
                        class: "tabs tabs-box",
                        a {
                            role: "tab",
                            class: if tab() == AuthTab::Login { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(AuthTab::Login),
                            "Login"
                        }
                        a {
                            role: "tab",
                            class: if tab() == AuthTab::Register { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(AuthTab::Register),
                            "Register"
                        }
                    }
                    form {
                        class: "flex flex-col gap-3",
                        onsubmit: on_submit,
                        if tab() == AuthTab::Register {
                            input {
                                class: "input input-bordered w-full",
                                placeholder: "Username",
                                value: "{username}",
                                oninput: move |e| username.set(e.value()),
                            }
                        }
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            if tab() == AuthTab::Login { "Login" } else { "Create account" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_minimum_lengths() {
        assert!(validate_credentials(Some("ab"), "secret1").is_err());
        assert!(validate_credentials(Some("abc"), "12345").is_err());
        assert!(validate_credentials(Some("abc"), "123456").is_ok());
        assert!(validate_credentials(None, "123456").is_ok());
    }
}
