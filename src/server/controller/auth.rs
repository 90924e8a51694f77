use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthResponseDto, DashboardUserDto, DashboardUserListDto, LoginDto, RegisterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{bearer_token, AuthGuard, Permission},
        service::auth::{AuthService, Session},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct SetAdminParams {
    pub is_admin: bool,
}

fn auth_response(session: Session, message: &str) -> AuthResponseDto {
    AuthResponseDto {
        token: session.token,
        user: session.user.into_dto(),
        message: message.to_string(),
    }
}

/// Register a new dashboard account.
///
/// The first account ever registered becomes an admin. The response carries a bearer
/// token so the client is logged in right away.
///
/// # Returns
/// - `201 Created` - Account created and logged in
/// - `400 Bad Request` - Invalid input or duplicate username/email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db).register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(auth_response(session, "Registration successful")),
    ))
}

/// Log in with email & password.
///
/// # Returns
/// - `200 OK` - Credentials valid, new token issued
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db).login(payload).await?;

    Ok((StatusCode::OK, Json(auth_response(session, "Login successful"))))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = DashboardUserDto),
        (status = 401, description = "Missing, unknown or expired token", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Revoke the presented bearer token.
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - No token presented
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "No token presented", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    AuthService::new(&state.db).logout(token).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// List all dashboard accounts.
///
/// # Access Control
/// - `Admin` - Only admins can manage users
///
/// # Returns
/// - `200 OK` - Accounts ordered by creation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "All accounts", body = DashboardUserListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = AuthService::new(&state.db)
        .list_users()
        .await?
        .into_iter()
        .map(|user| user.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DashboardUserListDto { users })))
}

/// Grant or revoke admin rights of another account.
///
/// # Access Control
/// - `Admin` - Only admins can manage users
///
/// # Returns
/// - `200 OK` - Status changed
/// - `400 Bad Request` - Attempt to change your own status
/// - `404 Not Found` - No such account
#[utoipa::path(
    put,
    path = "/api/auth/users/{user_id}/admin",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Path, description = "Dashboard user ID"),
        ("is_admin" = bool, Query, description = "New admin status")
    ),
    responses(
        (status = 200, description = "Admin status changed", body = MessageDto),
        (status = 400, description = "Cannot change your own status", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Query(params): Query<SetAdminParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    AuthService::new(&state.db)
        .set_admin(actor.id, user_id, params.is_admin)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Admin status updated".to_string(),
        }),
    ))
}

/// Delete another account and its tokens.
///
/// # Access Control
/// - `Admin` - Only admins can manage users
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `400 Bad Request` - Attempt to delete yourself
/// - `404 Not Found` - No such account
#[utoipa::path(
    delete,
    path = "/api/auth/users/{user_id}",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Path, description = "Dashboard user ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Cannot delete yourself", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    AuthService::new(&state.db)
        .delete_user(actor.id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
