use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordGuildEmoji::Table)
                    .if_not_exists()
                    .col(string(DiscordGuildEmoji::EmojiId).primary_key())
                    .col(string(DiscordGuildEmoji::GuildId))
                    .col(string(DiscordGuildEmoji::Name))
                    .col(boolean(DiscordGuildEmoji::Animated))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discord_guild_emoji_guild_id")
                    .table(DiscordGuildEmoji::Table)
                    .col(DiscordGuildEmoji::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordGuildEmoji::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordGuildEmoji {
    Table,
    EmojiId,
    GuildId,
    Name,
    Animated,
}
