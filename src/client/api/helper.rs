use crate::{
    client::{model::error::ApiError, store::user::stored_token},
    model::api::ErrorDto,
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from(response, status).await)
    }
}

/// Helper function to parse empty success responses (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

async fn error_from(response: Response, status: u64) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Adds the stored bearer token, if any
fn authorize(request: Request) -> Request {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Create an authorized GET request
pub fn get(url: &str) -> Request {
    authorize(Request::get(url))
}

/// Create an authorized POST request with JSON content type
pub fn post(url: &str) -> Request {
    authorize(Request::post(url).header("Content-Type", "application/json"))
}

/// Create an authorized PUT request with JSON content type
pub fn put(url: &str) -> Request {
    authorize(Request::put(url).header("Content-Type", "application/json"))
}

/// Create an authorized DELETE request
pub fn delete(url: &str) -> Request {
    authorize(Request::delete(url))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Builds `/api/guilds/{guild_id}{path}`
pub fn guild_url(guild_id: u64, path: &str) -> String {
    format!("/api/guilds/{}{}", guild_id, path)
}
