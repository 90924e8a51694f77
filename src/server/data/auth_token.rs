//! Bearer token data repository.
//!
//! Tokens are opaque random strings mapped to a dashboard user with an expiry.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::dashboard_user::DashboardUser;

pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new token for `user_id` valid until `expires_at`.
    pub async fn create(
        &self,
        token: &str,
        user_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::auth_token::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Resolves a token to its user if the token exists and has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardUser))` - Token is valid
    /// - `Ok(None)` - Token is unknown, expired, or its user no longer exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid_user(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<DashboardUser>, DbErr> {
        let Some(stored) = entity::prelude::AuthToken::find_by_id(token.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if stored.expires_at <= now {
            return Ok(None);
        }

        let user = entity::prelude::DashboardUser::find_by_id(stored.user_id)
            .one(self.db)
            .await?;

        Ok(user.map(DashboardUser::from_entity))
    }

    /// Revokes a single token, returning whether it existed.
    pub async fn delete(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_by_id(token.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every token that expired before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
