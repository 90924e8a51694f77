//! Cached Discord server data repository.
//!
//! Roles, channels and emojis of a guild are copied from Discord so the dashboard can
//! offer them in selectors without a running bot. A sync replaces the cached rows of a
//! guild wholesale.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::model::server_data::{ServerData, SyncServerDataParam};

pub struct ServerDataRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerDataRepository<'a> {
    /// Creates a new ServerDataRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerDataRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces every cached role, channel and emoji of a guild.
    ///
    /// Runs in a single transaction so readers never observe a half-synced guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `param` - Freshly fetched server data
    ///
    /// # Returns
    /// - `Ok(())` - Cache replaced
    /// - `Err(DbErr)` - Database error, the previous cache is kept
    pub async fn replace(&self, guild_id: u64, param: SyncServerDataParam) -> Result<(), DbErr> {
        let guild_id = guild_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::DiscordGuildRole::delete_many()
            .filter(entity::discord_guild_role::Column::GuildId.eq(&guild_id))
            .exec(&txn)
            .await?;
        entity::prelude::DiscordGuildChannel::delete_many()
            .filter(entity::discord_guild_channel::Column::GuildId.eq(&guild_id))
            .exec(&txn)
            .await?;
        entity::prelude::DiscordGuildEmoji::delete_many()
            .filter(entity::discord_guild_emoji::Column::GuildId.eq(&guild_id))
            .exec(&txn)
            .await?;

        if !param.roles.is_empty() {
            entity::prelude::DiscordGuildRole::insert_many(param.roles.into_iter().map(|role| {
                entity::discord_guild_role::ActiveModel {
                    role_id: ActiveValue::Set(role.role_id),
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    name: ActiveValue::Set(role.name),
                    color: ActiveValue::Set(role.color),
                    position: ActiveValue::Set(role.position),
                }
            }))
            .exec(&txn)
            .await?;
        }

        if !param.channels.is_empty() {
            entity::prelude::DiscordGuildChannel::insert_many(param.channels.into_iter().map(
                |channel| entity::discord_guild_channel::ActiveModel {
                    channel_id: ActiveValue::Set(channel.channel_id),
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    name: ActiveValue::Set(channel.name),
                    kind: ActiveValue::Set(channel.kind),
                    position: ActiveValue::Set(channel.position),
                },
            ))
            .exec(&txn)
            .await?;
        }

        if !param.emojis.is_empty() {
            entity::prelude::DiscordGuildEmoji::insert_many(param.emojis.into_iter().map(
                |emoji| entity::discord_guild_emoji::ActiveModel {
                    emoji_id: ActiveValue::Set(emoji.emoji_id),
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    name: ActiveValue::Set(emoji.name),
                    animated: ActiveValue::Set(emoji.animated),
                },
            ))
            .exec(&txn)
            .await?;
        }

        txn.commit().await
    }

    /// Loads the cached server data of a guild.
    ///
    /// `last_sync` is left empty, the caller fills it from the guild configuration.
    pub async fn get(&self, guild_id: u64) -> Result<ServerData, DbErr> {
        let id = guild_id.to_string();

        let roles = entity::prelude::DiscordGuildRole::find()
            .filter(entity::discord_guild_role::Column::GuildId.eq(&id))
            .all(self.db)
            .await?;
        let channels = entity::prelude::DiscordGuildChannel::find()
            .filter(entity::discord_guild_channel::Column::GuildId.eq(&id))
            .all(self.db)
            .await?;
        let emojis = entity::prelude::DiscordGuildEmoji::find()
            .filter(entity::discord_guild_emoji::Column::GuildId.eq(&id))
            .all(self.db)
            .await?;

        Ok(ServerData {
            guild_id,
            roles,
            channels,
            emojis,
            last_sync: None,
        })
    }
}
