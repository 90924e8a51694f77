use crate::{
    model::ticket::{CreateTicketPanelDto, TicketCategoryDto, UpdateTicketPanelDto},
    server::{
        data::ticket::{TicketPanelRepository, TicketRepository},
        error::AppError,
        model::ticket::{CreateTicketPanelParam, TicketStatus},
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod create_panel;
mod next_ticket_number;
mod status;
