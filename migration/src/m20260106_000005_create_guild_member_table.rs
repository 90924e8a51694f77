use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildMember::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildMember::Id))
                    .col(string(GuildMember::GuildId))
                    .col(string(GuildMember::UserId))
                    .col(big_integer(GuildMember::Xp))
                    .col(integer(GuildMember::Level))
                    .col(big_integer(GuildMember::Messages))
                    .col(integer(GuildMember::Warnings))
                    .col(timestamp_null(GuildMember::LastXpAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_member_unique")
                    .table(GuildMember::Table)
                    .col(GuildMember::GuildId)
                    .col(GuildMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildMember {
    Table,
    Id,
    GuildId,
    UserId,
    Xp,
    Level,
    Messages,
    Warnings,
    LastXpAt,
}
