//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Starts high so generated Discord ids never collide with the small literal
/// ids tests use directly.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(100_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a dashboard user together with a valid bearer token.
///
/// # Arguments
/// - `db` - Database connection
/// - `is_admin` - Whether the created user is an administrator
///
/// # Returns
/// - `Ok((user, token))` - Created user and its token
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_token(
    db: &DatabaseConnection,
    is_admin: bool,
) -> Result<(entity::dashboard_user::Model, entity::auth_token::Model), DbErr> {
    let user = crate::factory::dashboard_user::DashboardUserFactory::new(db)
        .admin(is_admin)
        .build()
        .await?;
    let token = crate::factory::auth_token::create_token(db, user.id).await?;

    Ok((user, token))
}
