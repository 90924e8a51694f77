//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod custom_command;
pub mod dashboard_user;
pub mod game;
pub mod guild_config;
pub mod leveling;
pub mod member;
pub mod moderation;
pub mod news;
pub mod reaction_role;
pub mod server_data;
pub mod temp_channel;
pub mod ticket;
