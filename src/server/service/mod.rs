//! Business logic layer.
//!
//! Services validate input, combine repositories and enforce the rules of each
//! feature. They are constructed per request around a borrowed database connection
//! and shared by the HTTP controllers, the Discord bot handlers and the scheduler.

pub mod auth;
pub mod bot_setting;
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
