//! Shared axum state.

use sea_orm::DatabaseConnection;

use crate::server::bot::supervisor::BotSupervisor;

/// Resources every handler can reach. All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Client for outgoing requests, handed to the bot for AI chat completions.
    pub http_client: reqwest::Client,

    /// Starts, stops & reports on the in-process Discord bot.
    ///
    /// Also exposes the running bot's HTTP client for API operations such as
    /// sending ticket panels or syncing server data.
    pub bot: BotSupervisor,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, bot: BotSupervisor) -> Self {
        Self {
            db,
            http_client,
            bot,
        }
    }
}
