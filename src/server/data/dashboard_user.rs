//! Dashboard user data repository for database operations.
//!
//! This module provides the `DashboardUserRepository` for managing dashboard account
//! records. It handles account creation, lookups by id, email or username, admin status
//! management and deletion with conversion between entity models and domain models at
//! the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::dashboard_user::{CreateDashboardUserParam, DashboardUser};

/// Repository providing database operations for dashboard accounts.
pub struct DashboardUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardUserRepository<'a> {
    /// Creates a new DashboardUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DashboardUserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new dashboard user.
    ///
    /// Uniqueness of username and email is enforced by the schema, callers are expected
    /// to check for duplicates first to produce a friendly error.
    ///
    /// # Arguments
    /// - `param` - Account data with an already hashed password
    ///
    /// # Returns
    /// - `Ok(DashboardUser)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including unique violations
    pub async fn create(&self, param: CreateDashboardUserParam) -> Result<DashboardUser, DbErr> {
        let entity = entity::dashboard_user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            password_salt: ActiveValue::Set(param.password_salt),
            is_admin: ActiveValue::Set(param.is_admin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DashboardUser::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardUser))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<DashboardUser>, DbErr> {
        let entity = entity::prelude::DashboardUser::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DashboardUser::from_entity))
    }

    /// Finds a user by email, compared case-insensitively.
    ///
    /// Emails are stored lower-cased by the auth service so an exact match on the
    /// lower-cased input is sufficient.
    ///
    /// # Arguments
    /// - `email` - Email address as entered by the user
    ///
    /// # Returns
    /// - `Ok(Some(DashboardUser))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<DashboardUser>, DbErr> {
        let entity = entity::prelude::DashboardUser::find()
            .filter(entity::dashboard_user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(DashboardUser::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<DashboardUser>, DbErr> {
        let entity = entity::prelude::DashboardUser::find()
            .filter(entity::dashboard_user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(DashboardUser::from_entity))
    }

    /// Counts all dashboard users.
    ///
    /// Used during registration to grant admin to the very first account.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DashboardUser::find().count(self.db).await
    }

    /// Retrieves every user ordered by creation time, oldest first.
    pub async fn get_all(&self) -> Result<Vec<DashboardUser>, DbErr> {
        let entities = entity::prelude::DashboardUser::find()
            .order_by_asc(entity::dashboard_user::Column::CreatedAt)
            .order_by_asc(entity::dashboard_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DashboardUser::from_entity).collect())
    }

    /// Sets the admin flag of a user.
    ///
    /// # Arguments
    /// - `id` - Dashboard user id
    /// - `is_admin` - New admin status
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_admin(&self, id: i32, is_admin: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::DashboardUser::update_many()
            .filter(entity::dashboard_user::Column::Id.eq(id))
            .col_expr(
                entity::dashboard_user::Column::IsAdmin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user together with all of their bearer tokens.
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::DashboardUser::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
