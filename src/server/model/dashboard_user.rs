//! Dashboard account domain models and parameters.
//!
//! Dashboard users are accounts of this application itself and have no relation
//! to Discord identities.

use chrono::{DateTime, Utc};

use crate::model::auth::DashboardUserDto;

/// Dashboard account including its stored credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Hex encoded SHA-256 of salt + password.
    pub password_hash: String,
    /// Hex encoded random salt.
    pub password_salt: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl DashboardUser {
    /// Converts an entity model to a dashboard user domain model at the repository boundary.
    pub fn from_entity(entity: entity::dashboard_user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            password_salt: entity.password_salt,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }

    /// Converts the user to a DTO, dropping credential fields.
    pub fn into_dto(self) -> DashboardUserDto {
        DashboardUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new dashboard user.
///
/// The password has already been hashed by the auth service.
#[derive(Debug, Clone)]
pub struct CreateDashboardUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub is_admin: bool,
}
