use crate::server::data::bot_setting::BotSettingRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod set;
