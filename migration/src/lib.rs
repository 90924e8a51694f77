pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_dashboard_user_table;
mod m20260105_000002_create_auth_token_table;
mod m20260105_000003_create_bot_setting_table;
mod m20260106_000004_create_guild_config_table;
mod m20260106_000005_create_guild_member_table;
mod m20260106_000006_create_warning_table;
mod m20260106_000007_create_mod_log_table;
mod m20260107_000008_create_custom_command_table;
mod m20260107_000009_create_news_table;
mod m20260108_000010_create_temp_channel_table;
mod m20260108_000011_create_temp_creator_table;
mod m20260109_000012_create_reaction_role_table;
mod m20260109_000013_create_game_table;
mod m20260110_000014_create_level_reward_table;
mod m20260110_000015_create_voice_session_table;
mod m20260111_000016_create_ticket_panel_table;
mod m20260111_000017_create_ticket_table;
mod m20260112_000018_create_discord_guild_role_table;
mod m20260112_000019_create_discord_guild_channel_table;
mod m20260112_000020_create_discord_guild_emoji_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_dashboard_user_table::Migration),
            Box::new(m20260105_000002_create_auth_token_table::Migration),
            Box::new(m20260105_000003_create_bot_setting_table::Migration),
            Box::new(m20260106_000004_create_guild_config_table::Migration),
            Box::new(m20260106_000005_create_guild_member_table::Migration),
            Box::new(m20260106_000006_create_warning_table::Migration),
            Box::new(m20260106_000007_create_mod_log_table::Migration),
            Box::new(m20260107_000008_create_custom_command_table::Migration),
            Box::new(m20260107_000009_create_news_table::Migration),
            Box::new(m20260108_000010_create_temp_channel_table::Migration),
            Box::new(m20260108_000011_create_temp_creator_table::Migration),
            Box::new(m20260109_000012_create_reaction_role_table::Migration),
            Box::new(m20260109_000013_create_game_table::Migration),
            Box::new(m20260110_000014_create_level_reward_table::Migration),
            Box::new(m20260110_000015_create_voice_session_table::Migration),
            Box::new(m20260111_000016_create_ticket_panel_table::Migration),
            Box::new(m20260111_000017_create_ticket_table::Migration),
            Box::new(m20260112_000018_create_discord_guild_role_table::Migration),
            Box::new(m20260112_000019_create_discord_guild_channel_table::Migration),
            Box::new(m20260112_000020_create_discord_guild_emoji_table::Migration),
        ]
    }
}
