use crate::server::{data::news::NewsRepository, error::AppError, model::news::CreateNewsParam};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_due;
