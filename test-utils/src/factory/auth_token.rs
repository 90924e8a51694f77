//! Auth token factory for creating bearer token entities in tests.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating bearer tokens bound to a dashboard user.
///
/// Defaults to a unique token string that expires in 7 days.
pub struct AuthTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_in: Duration,
}

impl<'a> AuthTokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("token-{:060}", next_id()),
            expires_in: Duration::days(7),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the lifetime of the token relative to now, negative values produce expired tokens.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub async fn build(self) -> Result<entity::auth_token::Model, DbErr> {
        let now = Utc::now();
        entity::auth_token::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + self.expires_in),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid token for the provided user.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    AuthTokenFactory::new(db, user_id).build().await
}
