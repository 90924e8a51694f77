use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LevelReward::Table)
                    .if_not_exists()
                    .col(pk_auto(LevelReward::Id))
                    .col(string(LevelReward::GuildId))
                    .col(integer(LevelReward::Level))
                    .col(string(LevelReward::RewardType))
                    .col(string(LevelReward::RewardValue))
                    .col(string_null(LevelReward::RewardName))
                    .col(boolean(LevelReward::Enabled))
                    .col(
                        timestamp(LevelReward::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_level_reward_guild_level")
                    .table(LevelReward::Table)
                    .col(LevelReward::GuildId)
                    .col(LevelReward::Level)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LevelReward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LevelReward {
    Table,
    Id,
    GuildId,
    Level,
    RewardType,
    RewardValue,
    RewardName,
    Enabled,
    CreatedAt,
}
