pub use super::auth_token::Entity as AuthToken;
pub use super::bot_setting::Entity as BotSetting;
pub use super::custom_command::Entity as CustomCommand;
pub use super::dashboard_user::Entity as DashboardUser;
pub use super::discord_guild_channel::Entity as DiscordGuildChannel;
pub use super::discord_guild_emoji::Entity as DiscordGuildEmoji;
pub use super::discord_guild_role::Entity as DiscordGuildRole;
pub use super::game::Entity as Game;
pub use super::guild_config::Entity as GuildConfig;
pub use super::guild_member::Entity as GuildMember;
pub use super::level_reward::Entity as LevelReward;
pub use super::mod_log::Entity as ModLog;
pub use super::news::Entity as News;
pub use super::reaction_role::Entity as ReactionRole;
pub use super::temp_channel::Entity as TempChannel;
pub use super::temp_creator::Entity as TempCreator;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_panel::Entity as TicketPanel;
pub use super::voice_session::Entity as VoiceSession;
pub use super::warning::Entity as Warning;
