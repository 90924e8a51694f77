pub mod prelude;

pub mod auth_token;
pub mod bot_setting;
pub mod custom_command;
pub mod dashboard_user;
pub mod discord_guild_channel;
pub mod discord_guild_emoji;
pub mod discord_guild_role;
pub mod game;
pub mod guild_config;
pub mod guild_member;
pub mod level_reward;
pub mod mod_log;
pub mod news;
pub mod reaction_role;
pub mod temp_channel;
pub mod temp_creator;
pub mod ticket;
pub mod ticket_panel;
pub mod voice_session;
pub mod warning;
