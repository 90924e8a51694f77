use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NewsDto {
    pub id: String,
    pub guild_id: String,
    pub title: String,
    pub content: String,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub posted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NewsListDto {
    pub news: Vec<NewsDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateNewsDto {
    pub title: String,
    pub content: String,
    /// RFC 3339 timestamp at which the entry gets posted to the news channel
    pub scheduled_for: Option<String>,
}
