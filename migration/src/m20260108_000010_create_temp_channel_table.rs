use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TempChannel::Table)
                    .if_not_exists()
                    .col(string(TempChannel::ChannelId).primary_key())
                    .col(string(TempChannel::GuildId))
                    .col(string(TempChannel::OwnerId))
                    .col(integer_null(TempChannel::CreatorId))
                    .col(string(TempChannel::Name))
                    .col(
                        timestamp(TempChannel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TempChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TempChannel {
    Table,
    ChannelId,
    GuildId,
    OwnerId,
    CreatorId,
    Name,
    CreatedAt,
}
