use crate::{
    model::reaction_role::{ReactionRoleEntryDto, UpdateReactionRoleDto},
    server::{
        data::reaction_role::ReactionRoleRepository,
        error::AppError,
        model::reaction_role::{CreateReactionRolesParam, PENDING_MESSAGE_ID},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod panel;
mod update;
