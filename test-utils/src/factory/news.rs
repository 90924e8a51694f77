//! News entry factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating news rows.
///
/// Defaults to an unscheduled, unposted entry with a generated id.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    guild_id: String,
    title: String,
    content: String,
    scheduled_for: Option<DateTime<Utc>>,
    posted: bool,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("news-{}", id),
            guild_id: guild_id.into(),
            title: format!("News {}", id),
            content: "Content".to_string(),
            scheduled_for: None,
            posted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn scheduled_for(mut self, scheduled_for: DateTime<Utc>) -> Self {
        self.scheduled_for = Some(scheduled_for);
        self
    }

    pub fn posted(mut self, posted: bool) -> Self {
        self.posted = posted;
        self
    }

    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            id: ActiveValue::Set(self.id),
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            scheduled_for: ActiveValue::Set(self.scheduled_for),
            posted: ActiveValue::Set(self.posted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_news(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db, guild_id).build().await
}
