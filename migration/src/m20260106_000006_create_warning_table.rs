use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warning::Table)
                    .if_not_exists()
                    .col(pk_auto(Warning::Id))
                    .col(string(Warning::GuildId))
                    .col(string(Warning::UserId))
                    .col(string(Warning::ModeratorId))
                    .col(string(Warning::Reason))
                    .col(
                        timestamp(Warning::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_warning_guild_user")
                    .table(Warning::Table)
                    .col(Warning::GuildId)
                    .col(Warning::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Warning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Warning {
    Table,
    Id,
    GuildId,
    UserId,
    ModeratorId,
    Reason,
    CreatedAt,
}
