use crate::server::{
    data::moderation::{ModLogRepository, WarningRepository},
    error::AppError,
    model::moderation::ModerationActionParam,
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod delete_for_user;
mod list_recent;
