use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TempCreator::Table)
                    .if_not_exists()
                    .col(pk_auto(TempCreator::Id))
                    .col(string(TempCreator::GuildId))
                    .col(string(TempCreator::ChannelId))
                    .col(string_null(TempCreator::CategoryId))
                    .col(string(TempCreator::NameTemplate))
                    .col(string(TempCreator::NumberingType))
                    .col(string(TempCreator::Position))
                    .col(integer(TempCreator::DefaultLimit))
                    .col(integer(TempCreator::DefaultBitrate))
                    .col(boolean(TempCreator::AllowRename))
                    .col(boolean(TempCreator::AllowLimit))
                    .col(boolean(TempCreator::AllowLock))
                    .col(boolean(TempCreator::AllowHide))
                    .col(boolean(TempCreator::AllowKick))
                    .col(boolean(TempCreator::AllowPermit))
                    .col(boolean(TempCreator::AllowBitrate))
                    .col(
                        timestamp(TempCreator::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_temp_creator_guild_id")
                    .table(TempCreator::Table)
                    .col(TempCreator::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TempCreator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TempCreator {
    Table,
    Id,
    GuildId,
    ChannelId,
    CategoryId,
    NameTemplate,
    NumberingType,
    Position,
    DefaultLimit,
    DefaultBitrate,
    AllowRename,
    AllowLimit,
    AllowLock,
    AllowHide,
    AllowKick,
    AllowPermit,
    AllowBitrate,
    CreatedAt,
}
