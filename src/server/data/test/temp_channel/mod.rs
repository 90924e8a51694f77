use crate::{
    model::temp_channel::UpdateTempCreatorDto,
    server::{
        data::temp_channel::{TempChannelRepository, TempCreatorRepository},
        error::AppError,
        model::temp_channel::CreateTempChannelParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod channels;
mod update_creator;
