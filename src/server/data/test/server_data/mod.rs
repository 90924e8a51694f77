use crate::server::{
    data::server_data::ServerDataRepository,
    model::server_data::{SyncChannelParam, SyncEmojiParam, SyncRoleParam, SyncServerDataParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;
