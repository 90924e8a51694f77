use crate::server::{
    data::leveling::{LevelRewardRepository, VoiceSessionRepository},
    error::AppError,
    model::leveling::CreateLevelRewardParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod rewards;
mod voice_sessions;
