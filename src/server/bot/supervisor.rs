//! Lifecycle control of the in-process Discord bot.
//!
//! The dashboard starts & stops the bot at runtime, so the serenity client is not
//! created at launch. `BotSupervisor` owns the running client's HTTP handle, shard
//! manager and news scheduler while it runs.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, ShardManager};
use serenity::http::Http;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_cron_scheduler::JobScheduler;

use crate::{
    model::{
        api::ActionResultDto,
        bot::{BotStatusDto, BotTestDto},
    },
    server::{
        bot::{handler::Handler, log::BotLog},
        error::AppError,
        scheduler,
        service::bot_setting::BotSettingService,
    },
};

/// Discord bot tokens are well above this length, shorter values are certainly wrong.
const MIN_TOKEN_LENGTH: usize = 50;

struct RunningBot {
    http: Arc<Http>,
    shard_manager: Arc<ShardManager>,
    scheduler: JobScheduler,
    task: JoinHandle<()>,
}

impl RunningBot {
    /// The client task ends on its own when the gateway connection fails fatally.
    fn is_alive(&self) -> bool {
        !self.task.is_finished()
    }
}

#[derive(Clone)]
pub struct BotSupervisor {
    db: DatabaseConnection,
    http_client: reqwest::Client,
    running: Arc<RwLock<Option<RunningBot>>>,
    log: BotLog,
}

impl BotSupervisor {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client) -> Self {
        Self {
            db,
            http_client,
            running: Arc::new(RwLock::new(None)),
            log: BotLog::new(),
        }
    }

    pub fn log(&self) -> &BotLog {
        &self.log
    }

    pub async fn is_running(&self) -> bool {
        self.running
            .read()
            .await
            .as_ref()
            .is_some_and(RunningBot::is_alive)
    }

    /// HTTP client of the running bot, `None` while stopped.
    pub async fn http(&self) -> Option<Arc<Http>> {
        self.running
            .read()
            .await
            .as_ref()
            .filter(|bot| bot.is_alive())
            .map(|bot| bot.http.clone())
    }

    /// Like [`Self::http`] but fails with 400 when the bot is stopped.
    pub async fn require_http(&self) -> Result<Arc<Http>, AppError> {
        self.http()
            .await
            .ok_or_else(|| AppError::BadRequest("Bot is not running".to_string()))
    }

    /// Connects the bot with `token` and starts the news scheduler.
    ///
    /// # Returns
    /// - `Ok(ActionResultDto { success: true })` - Bot started
    /// - `Ok(ActionResultDto { success: false })` - Bot was already running
    /// - `Err(AppError)` - Client or scheduler could not be created
    pub async fn start(&self, token: String) -> Result<ActionResultDto, AppError> {
        let mut running = self.running.write().await;

        if running.as_ref().is_some_and(RunningBot::is_alive) {
            return Ok(ActionResultDto {
                success: false,
                message: "Bot is already running".to_string(),
            });
        }

        // A crashed client leaves its scheduler behind
        if let Some(mut stale) = running.take() {
            if let Err(e) = stale.scheduler.shutdown().await {
                self.log
                    .error(format!("Failed to stop news scheduler of crashed bot: {}", e));
            }
        }

        let handler = Handler::new(
            self.db.clone(),
            self.http_client.clone(),
            self.log.clone(),
        );

        let mut client = Client::builder(&token, intents())
            .event_handler(handler)
            .await?;

        let http = client.http.clone();
        let shard_manager = client.shard_manager.clone();

        let scheduler =
            scheduler::news::start_scheduler(self.db.clone(), http.clone(), self.log.clone())
                .await?;

        let log = self.log.clone();
        let task = tokio::spawn(async move {
            match client.start().await {
                Ok(()) => log.info("Discord bot disconnected"),
                Err(e) => log.error(format!("Discord bot error: {}", e)),
            }
        });

        *running = Some(RunningBot {
            http,
            shard_manager,
            scheduler,
            task,
        });

        self.log.info("Discord bot started");

        Ok(ActionResultDto {
            success: true,
            message: "Bot started".to_string(),
        })
    }

    /// Shuts down all shards and the news scheduler.
    pub async fn stop(&self) -> Result<ActionResultDto, AppError> {
        let Some(mut bot) = self.running.write().await.take() else {
            return Ok(ActionResultDto {
                success: false,
                message: "Bot is not running".to_string(),
            });
        };

        let was_alive = bot.is_alive();

        bot.shard_manager.shutdown_all().await;
        bot.scheduler.shutdown().await?;

        if !was_alive {
            return Ok(ActionResultDto {
                success: false,
                message: "Bot is not running".to_string(),
            });
        }

        self.log.info("Discord bot stopped");

        Ok(ActionResultDto {
            success: true,
            message: "Bot stopped".to_string(),
        })
    }

    pub async fn status(&self) -> Result<BotStatusDto, AppError> {
        let settings = BotSettingService::new(&self.db);

        Ok(BotStatusDto {
            running: self.is_running().await,
            token_configured: settings.discord_token().await?.is_some(),
            openai_configured: settings.openai_api_key().await?.is_some(),
        })
    }

    /// Checks the stored configuration for problems that would prevent a start.
    pub async fn test(&self) -> Result<BotTestDto, AppError> {
        let token = BotSettingService::new(&self.db).discord_token().await?;
        Ok(check_token(token.as_deref()))
    }
}

/// Events the handlers need. `GUILD_MEMBERS` & `MESSAGE_CONTENT` are privileged and
/// must be enabled for the application in the Discord developer portal.
fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
}

fn check_token(token: Option<&str>) -> BotTestDto {
    let mut issues = Vec::new();

    match token {
        None => issues.push("No Discord bot token configured".to_string()),
        Some(token) if token.len() < MIN_TOKEN_LENGTH => {
            issues.push("Discord bot token looks too short".to_string())
        }
        Some(_) => {}
    }

    if issues.is_empty() {
        BotTestDto {
            success: true,
            issues,
            message: Some("Configuration looks valid".to_string()),
        }
    } else {
        BotTestDto {
            success: false,
            issues,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    #[test]
    fn flags_missing_and_short_tokens() {
        let missing = check_token(None);
        assert!(!missing.success);
        assert_eq!(missing.issues.len(), 1);

        let short = check_token(Some("abc"));
        assert!(!short.success);
        assert!(short.issues[0].contains("too short"));

        let valid = check_token(Some(&"x".repeat(72)));
        assert!(valid.success);
        assert!(valid.issues.is_empty());
    }

    /// Tests status and stop while no bot was ever started.
    ///
    /// Expected: not running, stop reports failure without erroring
    #[tokio::test]
    async fn reports_stopped_bot() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BotSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        BotSettingService::new(db)
            .set_openai_api_key("sk-test")
            .await?;

        let supervisor = BotSupervisor::new(db.clone(), reqwest::Client::new());

        let status = supervisor.status().await?;
        assert!(!status.running);
        assert!(!status.token_configured);
        assert!(status.openai_configured);

        let stopped = supervisor.stop().await?;
        assert!(!stopped.success);
        assert!(supervisor.http().await.is_none());

        Ok(())
    }
}
