use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(string(News::Id).primary_key())
                    .col(string(News::GuildId))
                    .col(string(News::Title))
                    .col(text(News::Content))
                    .col(timestamp_null(News::ScheduledFor))
                    .col(boolean(News::Posted))
                    .col(
                        timestamp(News::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_guild_id")
                    .table(News::Table)
                    .col(News::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    GuildId,
    Title,
    Content,
    ScheduledFor,
    Posted,
    CreatedAt,
}
