//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod auth_token;
pub mod bot_setting;
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

#[cfg(test)]
mod test;
