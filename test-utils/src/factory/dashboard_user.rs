//! Dashboard user factory for creating test account entities.
//!
//! This module provides factory methods for creating dashboard user entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dashboard users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dashboard_user::DashboardUserFactory;
///
/// let user = DashboardUserFactory::new(&db)
///     .username("alice")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct DashboardUserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password_hash: String,
    password_salt: String,
    is_admin: bool,
}

impl<'a> DashboardUserFactory<'a> {
    /// Creates a new DashboardUserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password hash & salt: placeholder values that never match a real password
    /// - is_admin: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DashboardUserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: "unset".to_string(),
            password_salt: "unset".to_string(),
            is_admin: false,
        }
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash & salt for the user.
    ///
    /// # Arguments
    /// - `hash` - Hex encoded salted password hash
    /// - `salt` - Hex encoded salt used to produce the hash
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password(mut self, hash: impl Into<String>, salt: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self.password_salt = salt.into();
        self
    }

    /// Sets the admin status for the user.
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dashboard_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dashboard_user::Model, DbErr> {
        entity::dashboard_user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            password_salt: ActiveValue::Set(self.password_salt),
            is_admin: ActiveValue::Set(self.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin dashboard user with default values.
///
/// Shorthand for `DashboardUserFactory::new(db).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
) -> Result<entity::dashboard_user::Model, DbErr> {
    DashboardUserFactory::new(db).build().await
}

/// Creates an admin dashboard user with default values.
pub async fn create_admin(
    db: &DatabaseConnection,
) -> Result<entity::dashboard_user::Model, DbErr> {
    DashboardUserFactory::new(db).admin(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DashboardUser)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.username.starts_with("user"));
        assert!(user.email.ends_with("@example.com"));
        assert!(!user.is_admin);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DashboardUser)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_admin(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.username, user2.username);
        assert!(user2.is_admin);

        Ok(())
    }
}
