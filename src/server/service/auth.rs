//! Dashboard authentication service.
//!
//! This module provides the `AuthService` for account registration, password login,
//! bearer token issuing & revocation and admin-only user management. Passwords are
//! stored as salted SHA-256 hashes and tokens are opaque random strings valid for
//! seven days.

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::{auth_token::AuthTokenRepository, dashboard_user::DashboardUserRepository},
        error::{auth::AuthError, AppError},
        model::dashboard_user::{CreateDashboardUserParam, DashboardUser},
        util::password::{generate_salt, generate_token, hash_password, verify_password},
    },
};

/// Lifetime of a freshly issued bearer token.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 6;

/// A user together with the bearer token issued to them.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: DashboardUser,
    pub token: String,
}

/// Service providing business logic for dashboard accounts.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account and logs it in.
    ///
    /// The very first account becomes an administrator so a fresh installation can be
    /// managed without manual database edits.
    ///
    /// # Arguments
    /// - `dto` - Username, email and plain text password
    ///
    /// # Returns
    /// - `Ok(Session)` - Created user with a new token
    /// - `Err(AppError::BadRequest)` - Invalid input or duplicate username/email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, dto: RegisterDto) -> Result<Session, AppError> {
        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_lowercase();

        let username_length = username.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username_length) {
            return Err(AppError::BadRequest(format!(
                "Username must be between {} and {} characters",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            )));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = DashboardUserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email is already registered".to_string()));
        }
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }

        let is_first_user = user_repo.count().await? == 0;
        let salt = generate_salt();

        let user = user_repo
            .create(CreateDashboardUserParam {
                username,
                email,
                password_hash: hash_password(&dto.password, &salt),
                password_salt: salt,
                is_admin: is_first_user,
            })
            .await?;

        let token = self.issue_token(user.id).await?;

        Ok(Session { user, token })
    }

    /// Verifies credentials and issues a new token.
    ///
    /// # Returns
    /// - `Ok(Session)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<Session, AppError> {
        let user_repo = DashboardUserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials(dto.email).into());
        };

        if !verify_password(&dto.password, &user.password_salt, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(dto.email).into());
        }

        let token = self.issue_token(user.id).await?;

        Ok(Session { user, token })
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Returns
    /// - `Ok(Some(DashboardUser))` - Token is valid
    /// - `Ok(None)` - Token unknown or expired
    pub async fn validate_token(&self, token: &str) -> Result<Option<DashboardUser>, AppError> {
        let token_repo = AuthTokenRepository::new(self.db);
        Ok(token_repo.find_valid_user(token, Utc::now()).await?)
    }

    /// Revokes a bearer token.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        AuthTokenRepository::new(self.db).delete(token).await?;
        Ok(())
    }

    /// Lists every account ordered by creation.
    pub async fn list_users(&self) -> Result<Vec<DashboardUser>, AppError> {
        Ok(DashboardUserRepository::new(self.db).get_all().await?)
    }

    /// Changes the admin flag of another account.
    ///
    /// # Arguments
    /// - `actor_id` - Id of the admin performing the change
    /// - `user_id` - Id of the account to change
    /// - `is_admin` - New admin status
    ///
    /// # Returns
    /// - `Ok(())` - Status updated
    /// - `Err(AppError::BadRequest)` - Actor tried to change their own status
    /// - `Err(AppError::NotFound)` - No such account
    pub async fn set_admin(
        &self,
        actor_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot change your own admin status".to_string(),
            ));
        }

        if !DashboardUserRepository::new(self.db)
            .set_admin(user_id, is_admin)
            .await?
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Deletes another account together with its tokens.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Actor tried to delete themselves
    /// - `Err(AppError::NotFound)` - No such account
    pub async fn delete_user(&self, actor_id: i32, user_id: i32) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !DashboardUserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Stores a new token for `user_id`, purging expired tokens of all users first.
    async fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let token_repo = AuthTokenRepository::new(self.db);
        let now = Utc::now();

        let purged = token_repo.delete_expired(now).await?;
        if purged > 0 {
            tracing::debug!("Purged {} expired auth tokens", purged);
        }

        let token = generate_token();
        token_repo
            .create(&token, user_id, now + Duration::days(TOKEN_LIFETIME_DAYS))
            .await?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn register_dto(username: &str, email: &str, password: &str) -> RegisterDto {
        RegisterDto {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Tests that only the first registered account becomes admin.
    ///
    /// Expected: Ok with is_admin true, then false
    #[tokio::test]
    async fn first_user_becomes_admin() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let first = service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await?;
        let second = service
            .register(register_dto("bob", "bob@example.com", "secret2"))
            .await?;

        assert!(first.user.is_admin);
        assert!(!second.user.is_admin);
        assert_eq!(first.token.len(), 64);

        Ok(())
    }

    /// Tests registration input validation.
    ///
    /// Expected: Err(BadRequest) for short names, short passwords and duplicates
    #[tokio::test]
    async fn rejects_invalid_registrations() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await?;

        let cases = [
            register_dto("al", "al@example.com", "secret1"),
            register_dto("carol", "carol@example.com", "12345"),
            register_dto("alice2", "ALICE@example.com", "secret1"),
            register_dto("alice", "other@example.com", "secret1"),
        ];

        for dto in cases {
            let result = service.register(dto).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    /// Tests logging in and validating the issued token.
    ///
    /// Expected: Ok for the right password, Err(InvalidCredentials) otherwise
    #[tokio::test]
    async fn logs_in_with_correct_password() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await?;

        let session = service
            .login(LoginDto {
                email: "Alice@Example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await?;
        let user = service.validate_token(&session.token).await?;
        assert_eq!(user.map(|u| u.username), Some("alice".to_string()));

        let result = service
            .login(LoginDto {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
        ));

        Ok(())
    }

    /// Tests that logging in clears out expired tokens.
    ///
    /// Expected: only the freshly issued token remains
    #[tokio::test]
    async fn login_purges_expired_tokens() -> Result<(), AppError> {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let registered = service
            .register(register_dto("alice", "alice@example.com", "secret1"))
            .await?;
        factory::auth_token::AuthTokenFactory::new(db, registered.user.id)
            .expires_in(Duration::days(-1))
            .build()
            .await?;
        AuthTokenRepository::new(db).delete(&registered.token).await?;
        assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 1);

        let session = service
            .login(LoginDto {
                email: "alice@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await?;

        let remaining = entity::prelude::AuthToken::find().all(db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].token, session.token);

        Ok(())
    }

    /// Tests that logout revokes the token.
    ///
    /// Expected: Ok(None) when validating after logout
    #[tokio::test]
    async fn logout_revokes_token() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_user, token) = factory::helpers::create_user_with_token(db, false).await?;

        let service = AuthService::new(db);
        assert!(service.validate_token(&token.token).await?.is_some());

        service.logout(&token.token).await?;
        assert!(service.validate_token(&token.token).await?.is_none());

        Ok(())
    }

    /// Tests that admins cannot modify their own account.
    ///
    /// Expected: Err(BadRequest) for self, Err(NotFound) for unknown ids
    #[tokio::test]
    async fn protects_own_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::create_admin(db).await?;
        let other = factory::create_user(db).await?;

        let service = AuthService::new(db);
        assert!(matches!(
            service.set_admin(admin.id, admin.id, false).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.delete_user(admin.id, admin.id).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.delete_user(admin.id, 9999).await,
            Err(AppError::NotFound(_))
        ));

        service.set_admin(admin.id, other.id, true).await?;
        service.delete_user(admin.id, other.id).await?;
        assert_eq!(service.list_users().await?.len(), 1);

        Ok(())
    }
}
