use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordGuildChannel::Table)
                    .if_not_exists()
                    .col(string(DiscordGuildChannel::ChannelId).primary_key())
                    .col(string(DiscordGuildChannel::GuildId))
                    .col(string(DiscordGuildChannel::Name))
                    .col(string(DiscordGuildChannel::Kind))
                    .col(integer(DiscordGuildChannel::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discord_guild_channel_guild_id")
                    .table(DiscordGuildChannel::Table)
                    .col(DiscordGuildChannel::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordGuildChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordGuildChannel {
    Table,
    ChannelId,
    GuildId,
    Name,
    Kind,
    Position,
}
