use chrono::{DateTime, Utc};

/// `YYYY-MM-DD HH:MM` in UTC
pub fn short_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
