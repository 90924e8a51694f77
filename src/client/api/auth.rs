use crate::{
    client::model::error::ApiError,
    model::{
        api::MessageDto,
        auth::{AuthResponseDto, DashboardUserDto, DashboardUserListDto, LoginDto, RegisterDto},
    },
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, post, put, send_request, serialize_json,
};

pub async fn register(payload: RegisterDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

pub async fn login(payload: LoginDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

/// Resolves the stored token to its user
pub async fn get_me() -> Result<DashboardUserDto, ApiError> {
    let response = send_request(get("/api/auth/me")).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<MessageDto, ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_response(response).await
}

pub async fn get_users() -> Result<DashboardUserListDto, ApiError> {
    let response = send_request(get("/api/auth/users")).await?;
    parse_response(response).await
}

pub async fn set_admin(user_id: i32, is_admin: bool) -> Result<MessageDto, ApiError> {
    let url = format!("/api/auth/users/{}/admin?is_admin={}", user_id, is_admin);
    let response = send_request(put(&url)).await?;
    parse_response(response).await
}

pub async fn delete_user(user_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/auth/users/{}", user_id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
