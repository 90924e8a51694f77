//! Data transfer objects shared between the dashboard client and the API server.
//!
//! Every type here is serialized as JSON over `/api`. Server builds additionally
//! derive `ToSchema` so the types appear in the generated OpenAPI document.

pub mod api;
pub mod auth;
pub mod bot;
pub mod command;
pub mod game;
pub mod guild;
pub mod leveling;
pub mod moderation;
pub mod news;
pub mod reaction_role;
pub mod server_data;
pub mod temp_channel;
pub mod ticket;
