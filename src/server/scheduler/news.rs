use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Timestamp};
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::{
        log::BotLog,
        util::{embed_colour, snowflake},
    },
    error::AppError,
    model::news::News,
    service::{guild::GuildService, news::NewsService},
};

/// Starts the scheduled news job
///
/// Runs every minute and posts each unposted news entry whose `scheduled_for` has
/// passed into its guild's news channel. The returned scheduler lives as long as the
/// bot runs and is shut down with it.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: HTTP client of the running bot
/// - `log`: Bot log receiving job failures
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    log: BotLog,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();
        let log = log.clone();

        Box::pin(async move {
            if let Err(e) = post_due_news(&db, &http, &log).await {
                log.error(format!("Error processing scheduled news: {}", e));
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    Ok(scheduler)
}

/// Posts all due news entries, skipping guilds without a news channel.
async fn post_due_news(
    db: &DatabaseConnection,
    http: &Http,
    log: &BotLog,
) -> Result<(), AppError> {
    let news_service = NewsService::new(db);
    let guild_service = GuildService::new(db);

    for news in news_service.due(Utc::now()).await? {
        let settings = guild_service.get(news.guild_id).await?.settings;

        let Some(channel_id) = snowflake(&settings.news_channel) else {
            continue;
        };

        match send_news(http, channel_id, &news, &settings.bot_embed_color).await {
            Ok(()) => {
                news_service.mark_posted(&news.id).await?;
                log.info(format!(
                    "Posted scheduled news '{}' in guild {}",
                    news.title, news.guild_id
                ));
            }
            Err(e) => log.error(format!("Failed to post news {}: {}", news.id, e)),
        }
    }

    Ok(())
}

async fn send_news(
    http: &Http,
    channel_id: u64,
    news: &News,
    colour: &str,
) -> Result<(), AppError> {
    let embed = CreateEmbed::new()
        .title(format!("📢 {}", news.title))
        .description(&news.content)
        .colour(embed_colour(colour))
        .timestamp(Timestamp::now());

    ChannelId::new(channel_id)
        .send_message(http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
