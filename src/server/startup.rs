use dioxus_logger::tracing;

use crate::server::{
    bot::supervisor::BotSupervisor, config::Config, error::AppError,
    service::bot_setting::BotSettingService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client used for outgoing API calls.
///
/// Redirects are disabled so a hostile upstream cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    Ok(client)
}

/// Seeds bot credentials from the environment into the settings table.
///
/// Values already saved from the dashboard win, so the environment only fills gaps.
pub async fn seed_bot_settings(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let settings = BotSettingService::new(db);

    if let Some(token) = &config.discord_bot_token {
        if settings.discord_token().await?.is_none() {
            settings.set_discord_token(token).await?;
            tracing::info!("Seeded Discord bot token from environment");
        }
    }

    if let Some(key) = &config.openai_api_key {
        if settings.openai_api_key().await?.is_none() {
            settings.set_openai_api_key(key).await?;
            tracing::info!("Seeded OpenAI API key from environment");
        }
    }

    Ok(())
}

/// Starts the bot at launch when autostart is enabled and a token is stored.
pub async fn autostart_bot(
    config: &Config,
    db: &sea_orm::DatabaseConnection,
    bot: &BotSupervisor,
) -> Result<(), AppError> {
    if !config.bot_autostart {
        return Ok(());
    }

    let Some(token) = BotSettingService::new(db).discord_token().await? else {
        tracing::warn!("BOT_AUTOSTART is set but no Discord bot token is configured");
        return Ok(());
    };

    let result = bot.start(token).await?;
    tracing::info!("{}", result.message);

    Ok(())
}
