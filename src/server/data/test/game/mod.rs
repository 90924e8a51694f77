use crate::server::{data::game::GameRepository, error::AppError, model::game::RecordGameParam};
use test_utils::{builder::TestBuilder, factory};

mod record;
mod stats;
