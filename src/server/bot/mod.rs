//! In-process Discord bot.
//!
//! The bot is started and stopped from the dashboard through [`supervisor::BotSupervisor`].
//! While it runs, its event handlers drive moderation, leveling, custom commands, AI chat,
//! temporary voice channels, reaction roles, games & tickets from the stored guild
//! configuration, and its HTTP client serves API operations such as posting ticket panels
//! or syncing server data.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, roles & channels
//! - `GUILD_MEMBERS` - Member joins & leaves for welcome messages (privileged intent)
//! - `GUILD_MESSAGES` & `MESSAGE_CONTENT` - Custom commands, AI chat & XP (privileged intent)
//! - `GUILD_VOICE_STATES` - Temporary channels & voice XP
//! - `GUILD_MESSAGE_REACTIONS` - Reaction roles
//!
//! Privileged intents must be explicitly enabled in the Discord Developer Portal.

pub mod ai;
pub mod command;
pub mod handler;
pub mod i18n;
pub mod log;
pub mod supervisor;
pub mod util;
