//! News data repository.
//!
//! News entries are either posted immediately or scheduled for a later time. The
//! scheduler polls for due entries and marks them posted once delivered.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::news::{CreateNewsParam, News},
};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all news of a guild, newest first.
    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<News>, AppError> {
        entity::prelude::News::find()
            .filter(entity::news::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::news::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(News::from_entity)
            .collect()
    }

    /// Inserts a news entry with a fresh UUID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Title, content and optional schedule time
    ///
    /// # Returns
    /// - `Ok(News)` - The created, not yet posted entry
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, guild_id: u64, param: CreateNewsParam) -> Result<News, AppError> {
        let entity = entity::news::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            scheduled_for: ActiveValue::Set(param.scheduled_for),
            posted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        News::from_entity(entity)
    }

    /// Deletes an entry of a guild, returning whether it existed.
    pub async fn delete(&self, guild_id: u64, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::News::delete_many()
            .filter(entity::news::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::news::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, guild_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::News::find()
            .filter(entity::news::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?)
    }

    /// Returns unposted entries of every guild whose schedule time is at or before `now`.
    ///
    /// Entries without a schedule time are posted on creation and never returned here.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<News>, AppError> {
        let pending = entity::prelude::News::find()
            .filter(entity::news::Column::Posted.eq(false))
            .filter(entity::news::Column::ScheduledFor.is_not_null())
            .order_by_asc(entity::news::Column::ScheduledFor)
            .all(self.db)
            .await?;

        pending
            .into_iter()
            .filter(|news| news.scheduled_for.is_some_and(|at| at <= now))
            .map(News::from_entity)
            .collect()
    }

    /// Flags an entry as delivered.
    pub async fn mark_posted(&self, id: &str) -> Result<(), AppError> {
        entity::news::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            posted: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
