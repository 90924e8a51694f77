use crate::server::{
    data::custom_command::CustomCommandRepository, error::AppError,
    model::custom_command::UpsertCustomCommandParam,
};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_name;
mod increment_uses;
mod upsert;
