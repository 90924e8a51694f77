use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::GuildId))
                    .col(string(Game::ChannelId))
                    .col(string(Game::GameType))
                    .col(text(Game::Players))
                    .col(string_null(Game::WinnerId))
                    .col(boolean(Game::Active))
                    .col(
                        timestamp(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Game::EndedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_guild_id")
                    .table(Game::Table)
                    .col(Game::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    GuildId,
    ChannelId,
    GameType,
    Players,
    WinnerId,
    Active,
    CreatedAt,
    EndedAt,
}
