use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordGuildRole::Table)
                    .if_not_exists()
                    .col(string(DiscordGuildRole::RoleId).primary_key())
                    .col(string(DiscordGuildRole::GuildId))
                    .col(string(DiscordGuildRole::Name))
                    .col(string(DiscordGuildRole::Color))
                    .col(small_integer(DiscordGuildRole::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discord_guild_role_guild_id")
                    .table(DiscordGuildRole::Table)
                    .col(DiscordGuildRole::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordGuildRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordGuildRole {
    Table,
    RoleId,
    GuildId,
    Name,
    Color,
    Position,
}
