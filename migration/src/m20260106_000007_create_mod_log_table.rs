use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ModLog::Id))
                    .col(string(ModLog::GuildId))
                    .col(string(ModLog::Action))
                    .col(string(ModLog::UserId))
                    .col(string(ModLog::ModeratorId))
                    .col(string(ModLog::Reason))
                    .col(
                        timestamp(ModLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mod_log_guild_id")
                    .table(ModLog::Table)
                    .col(ModLog::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModLog {
    Table,
    Id,
    GuildId,
    Action,
    UserId,
    ModeratorId,
    Reason,
    CreatedAt,
}
