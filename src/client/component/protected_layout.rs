use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        router::Route,
        store::user::UserState,
    },
    model::auth::DashboardUserDto,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(user: &Option<DashboardUserDto>, required_permissions: &[Permission]) -> bool {
    let user_data = match user {
        Some(u) => u,
        None => return false,
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => user_data.is_admin,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let user = user_store.read().user.clone();
    let fetch_completed = user_store.read().fetched;

    let user_logged_in = user.is_some();
    let has_required_permissions = check_permissions(&user, &permissions);

    // Redirect to the auth page once we know nobody is logged in
    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Auth {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        } else if user_logged_in && has_required_permissions {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(is_admin: bool) -> Option<DashboardUserDto> {
        Some(DashboardUserDto {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn admin_routes_require_admin_flag() {
        assert!(check_permissions(&user(false), &[Permission::LoggedIn]));
        assert!(!check_permissions(&user(false), &[Permission::Admin]));
        assert!(check_permissions(&user(true), &[Permission::Admin]));
        assert!(!check_permissions(&None, &[Permission::LoggedIn]));
    }
}
