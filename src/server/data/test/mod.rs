mod auth_token;
mod bot_setting;
mod custom_command;
mod dashboard_user;
mod game;
mod guild_config;
mod leveling;
mod member;
mod moderation;
mod news;
mod reaction_role;
mod server_data;
mod temp_channel;
mod ticket;
