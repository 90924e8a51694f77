use crate::server::{
    data::dashboard_user::DashboardUserRepository, model::dashboard_user::CreateDashboardUserParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all;
mod set_admin;
