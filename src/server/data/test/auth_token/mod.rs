use crate::server::data::auth_token::AuthTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_expired;
mod find_valid_user;
