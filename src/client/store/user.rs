use crate::{
    client::store::storage::{self, TOKEN_KEY, USER_KEY},
    model::auth::{AuthResponseDto, DashboardUserDto},
};

/// Logged in dashboard user.
///
/// `fetched` turns true once the stored token has been checked against
/// `/api/auth/me`, or immediately when there is no token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<DashboardUserDto>,
    pub fetched: bool,
}

impl UserState {
    /// Restores the user persisted by a previous session.
    pub fn from_storage() -> Self {
        let user = storage::get(USER_KEY).and_then(|json| serde_json::from_str(&json).ok());

        Self {
            user,
            fetched: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Stores the token & user of a successful login or registration.
    pub fn sign_in(&mut self, response: AuthResponseDto) {
        storage::set(TOKEN_KEY, &response.token);
        self.set_user(response.user);
    }

    pub fn set_user(&mut self, user: DashboardUserDto) {
        if let Ok(json) = serde_json::to_string(&user) {
            storage::set(USER_KEY, &json);
        }
        self.user = Some(user);
        self.fetched = true;
    }

    /// Forgets token & user, locally and in storage.
    pub fn sign_out(&mut self) {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_KEY);
        self.user = None;
        self.fetched = true;
    }
}

pub fn stored_token() -> Option<String> {
    storage::get(TOKEN_KEY).filter(|token| !token.is_empty())
}
