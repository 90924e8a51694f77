use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::GuildId))
                    .col(integer_null(Ticket::PanelId))
                    .col(string(Ticket::ChannelId))
                    .col(string(Ticket::UserId))
                    .col(integer(Ticket::Number))
                    .col(string(Ticket::Status))
                    .col(string_null(Ticket::ClaimedBy))
                    .col(string_null(Ticket::ClosedBy))
                    .col(
                        timestamp(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Ticket::ClosedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_guild_status")
                    .table(Ticket::Table)
                    .col(Ticket::GuildId)
                    .col(Ticket::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    GuildId,
    PanelId,
    ChannelId,
    UserId,
    Number,
    Status,
    ClaimedBy,
    ClosedBy,
    CreatedAt,
    ClosedAt,
}
