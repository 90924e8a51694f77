use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildId, Interaction, Member, Message, Reaction, Ready, User,
    VoiceState,
};
use serenity::async_trait;

use crate::server::bot::log::BotLog;

pub mod guild;
pub mod interaction;
pub mod leveling;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
///
/// Each event is delegated to a function of the matching submodule. Failures are
/// written to the bot log so they show up in the dashboard.
pub struct Handler {
    pub db: DatabaseConnection,
    /// Client for AI completion requests
    pub http_client: reqwest::Client,
    pub log: BotLog,
}

impl Handler {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, log: BotLog) -> Self {
        Self {
            db,
            http_client,
            log,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        if let Err(e) = ready::handle_ready(&self.db, &self.log, ctx, ready).await {
            self.log.error(format!("Failed to finish ready setup: {}", e));
        }
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let guild_id = guild.id;
        if let Err(e) = guild::handle_guild_create(&self.db, &self.log, guild).await {
            self.log
                .error(format!("Failed to set up guild {}: {}", guild_id, e));
        }
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let guild_id = new_member.guild_id;
        if let Err(e) = member::handle_guild_member_addition(&self.db, ctx, new_member).await {
            self.log.error(format!(
                "Failed to welcome member in guild {}: {}",
                guild_id, e
            ));
        }
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        if let Err(e) = member::handle_guild_member_removal(&self.db, ctx, guild_id, user).await
        {
            self.log.error(format!(
                "Failed to say goodbye in guild {}: {}",
                guild_id, e
            ));
        }
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let channel_id = message.channel_id;
        if let Err(e) = message::handle_message(self, ctx, message).await {
            self.log.error(format!(
                "Failed to process message in channel {}: {}",
                channel_id, e
            ));
        }
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let user_id = new.user_id;
        if let Err(e) = voice::handle_voice_state_update(&self.db, &self.log, ctx, old, new).await
        {
            self.log.error(format!(
                "Failed to process voice update of {}: {}",
                user_id, e
            ));
        }
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        if let Err(e) = reaction::handle_reaction(&self.db, ctx, add_reaction, true).await {
            self.log.error(format!("Failed to grant reaction role: {}", e));
        }
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        if let Err(e) = reaction::handle_reaction(&self.db, ctx, removed_reaction, false).await {
            self.log.error(format!("Failed to remove reaction role: {}", e));
        }
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Err(e) = interaction::handle_interaction(&self.db, &self.log, ctx, interaction).await
        {
            self.log.error(format!("Failed to handle interaction: {}", e));
        }
    }
}
