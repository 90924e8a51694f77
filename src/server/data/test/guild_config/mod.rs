use crate::{
    model::guild::GuildSettings,
    server::{data::guild_config::GuildConfigRepository, error::AppError},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod get_or_create;
mod save;
mod set_last_server_sync;
