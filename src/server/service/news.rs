//! News service with scheduled posting support.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::news::CreateNewsDto,
    server::{
        data::news::NewsRepository,
        error::AppError,
        model::news::{CreateNewsParam, News},
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, guild_id: u64) -> Result<Vec<News>, AppError> {
        NewsRepository::new(self.db).get_all(guild_id).await
    }

    /// Creates a news entry.
    ///
    /// # Returns
    /// - `Ok(News)` - The unposted entry
    /// - `Err(AppError::BadRequest)` - Empty title/content or invalid RFC 3339 schedule
    pub async fn create(&self, guild_id: u64, dto: CreateNewsDto) -> Result<News, AppError> {
        let title = dto.title.trim().to_string();
        let content = dto.content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        }

        let scheduled_for = dto
            .scheduled_for
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_schedule)
            .transpose()?;

        NewsRepository::new(self.db)
            .create(
                guild_id,
                CreateNewsParam {
                    title,
                    content,
                    scheduled_for,
                },
            )
            .await
    }

    pub async fn delete(&self, guild_id: u64, id: &str) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(guild_id, id).await? {
            return Err(AppError::NotFound("News not found".to_string()));
        }

        Ok(())
    }

    /// Unposted entries of every guild whose schedule has passed.
    pub async fn due(&self, now: DateTime<Utc>) -> Result<Vec<News>, AppError> {
        NewsRepository::new(self.db).get_due(now).await
    }

    pub async fn mark_posted(&self, id: &str) -> Result<(), AppError> {
        NewsRepository::new(self.db).mark_posted(id).await
    }
}

fn parse_schedule(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid scheduled_for '{}', expected an RFC 3339 timestamp",
                value
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::builder::TestBuilder;

    fn news(title: &str, scheduled_for: Option<&str>) -> CreateNewsDto {
        CreateNewsDto {
            title: title.to_string(),
            content: "Body".to_string(),
            scheduled_for: scheduled_for.map(str::to_string),
        }
    }

    #[test]
    fn parses_offsets_to_utc() {
        let date = parse_schedule("2030-01-01T12:00:00+02:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2030-01-01T10:00:00+00:00");
        assert!(parse_schedule("tomorrow").is_err());
    }

    /// Tests creating scheduled and unscheduled news.
    ///
    /// Expected: schedule parsed, Err(BadRequest) for bad input
    #[tokio::test]
    async fn creates_news() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NewsService::new(db);
        let created = service
            .create(1, news("Update", Some("2030-01-01T00:00:00Z")))
            .await?;
        assert!(!created.posted);
        assert!(created.scheduled_for.is_some());

        let blank_schedule = service.create(1, news("Other", Some(""))).await?;
        assert!(blank_schedule.scheduled_for.is_none());

        assert!(matches!(
            service.create(1, news(" ", None)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.create(1, news("Bad", Some("not a date"))).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    /// Tests that posted entries are no longer due.
    ///
    /// Expected: due once, empty after mark_posted
    #[tokio::test]
    async fn mark_posted_removes_from_due() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::News)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = NewsService::new(db);
        let past = (Utc::now() - Duration::minutes(5)).to_rfc3339();
        let created = service.create(1, news("Now", Some(&past))).await?;

        let due = service.due(Utc::now()).await?;
        assert_eq!(due.len(), 1);

        service.mark_posted(&created.id).await?;
        assert!(service.due(Utc::now()).await?.is_empty());

        assert!(matches!(
            service.delete(1, "missing").await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
