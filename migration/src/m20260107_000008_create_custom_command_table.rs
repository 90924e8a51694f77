use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomCommand::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomCommand::Id))
                    .col(string(CustomCommand::GuildId))
                    .col(string(CustomCommand::Name))
                    .col(text(CustomCommand::Response))
                    .col(string(CustomCommand::CreatedBy))
                    .col(integer(CustomCommand::Uses))
                    .col(
                        timestamp(CustomCommand::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_command_unique")
                    .table(CustomCommand::Table)
                    .col(CustomCommand::GuildId)
                    .col(CustomCommand::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomCommand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomCommand {
    Table,
    Id,
    GuildId,
    Name,
    Response,
    CreatedBy,
    Uses,
    CreatedAt,
}
