use crate::server::{data::member::MemberRepository, error::AppError, util::level::calculate_level};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod leaderboard;
mod warnings;
