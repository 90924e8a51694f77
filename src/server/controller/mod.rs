//! HTTP request handlers.
//!
//! Every handler authenticates through `AuthGuard`, delegates to a service and converts
//! the domain model it gets back into a DTO. Guild scoped resources live below
//! `/api/guilds/{guild_id}`.

pub mod auth;
pub mod bot;
pub mod custom_command;
pub mod game;
pub mod guild;
pub mod leveling;
pub mod moderation;
pub mod news;
pub mod reaction_role;
pub mod server_data;
pub mod temp_channel;
pub mod ticket;
