//! Error types and their HTTP mapping.
//!
//! Handlers, services and bot code all return [`AppError`]. When it reaches axum, auth
//! failures answer 401/403, `BadRequest` and `NotFound` pass their message through, and
//! everything else becomes a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

const GENERIC_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Answered by `AuthError::into_response` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failed call to the AI completion API.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API failure, boxed since `serenity::Error` is large.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// News job could not be registered or the scheduler failed to start.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// JSON stored in a text column or sent to Discord failed to (de)serialize.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// 404 with the message as body.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the message as body.
    #[error("{0}")]
    BadRequest(String),

    /// 500; the message is only logged.
    #[error("{0}")]
    InternalError(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Status code & client message for every variant except `AuthErr`.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::AuthErr(err) = self {
            return err.into_response();
        }

        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, message);
        }

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_message() {
        let (status, message) = AppError::BadRequest("Channel is required".to_string())
            .status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Channel is required");

        let (status, _) = AppError::NotFound("News not found".to_string()).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_errors_hide_details() {
        let (status, message) =
            AppError::InternalError("token table corrupt".to_string()).status_and_message();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, GENERIC_MESSAGE);
    }
}
