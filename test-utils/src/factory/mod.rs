//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about.
//!
//! # Overview
//!
//! Entities with many columns get a `Factory` struct for customization plus a
//! `create_*` convenience function. Simple rows only get the function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (user, token) = factory::helpers::create_user_with_token(&db, true).await?;
//!     let member = factory::guild_member::GuildMemberFactory::new(&db, "1")
//!         .xp(250)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `dashboard_user` & `auth_token` - Dashboard accounts and bearer tokens
//! - `guild_member` - Leveling & warning counters per member
//! - `moderation` - Warnings and moderation log entries
//! - `custom_command`, `news`, `reaction_role`, `game`
//! - `leveling` - Level rewards and voice sessions
//! - `temp_voice` - Temp voice creators and channels
//! - `ticket` - Ticket panels and tickets
//! - `server_data` - Cached Discord roles, channels and emojis

pub mod auth_token;
pub mod custom_command;
pub mod dashboard_user;
pub mod game;
pub mod guild_member;
pub mod helpers;
pub mod leveling;
pub mod moderation;
pub mod news;
pub mod reaction_role;
pub mod server_data;
pub mod temp_voice;
pub mod ticket;

pub use auth_token::create_token;
pub use custom_command::create_command;
pub use dashboard_user::{create_admin, create_user};
pub use guild_member::create_member_with_xp;
pub use news::create_news;
pub use reaction_role::create_reaction_role;
pub use server_data::{create_guild_channel, create_guild_emoji, create_guild_role};
pub use temp_voice::create_temp_channel;
pub use ticket::create_ticket;
