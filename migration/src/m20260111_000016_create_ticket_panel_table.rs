use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketPanel::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketPanel::Id))
                    .col(string(TicketPanel::GuildId))
                    .col(string(TicketPanel::ChannelId))
                    .col(string_null(TicketPanel::MessageId))
                    .col(string(TicketPanel::Title))
                    .col(text(TicketPanel::Description))
                    .col(string(TicketPanel::Color))
                    .col(string(TicketPanel::ButtonLabel))
                    .col(string(TicketPanel::ButtonEmoji))
                    .col(string_null(TicketPanel::TicketCategory))
                    .col(string(TicketPanel::TicketNameTemplate))
                    .col(text(TicketPanel::Categories))
                    .col(text(TicketPanel::CustomFields))
                    .col(text(TicketPanel::SupportRoles))
                    .col(text(TicketPanel::PingRoles))
                    .col(boolean(TicketPanel::ClaimEnabled))
                    .col(boolean(TicketPanel::TranscriptEnabled))
                    .col(integer(TicketPanel::TicketCounter))
                    .col(
                        timestamp(TicketPanel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_panel_guild_id")
                    .table(TicketPanel::Table)
                    .col(TicketPanel::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketPanel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketPanel {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Title,
    Description,
    Color,
    ButtonLabel,
    ButtonEmoji,
    TicketCategory,
    TicketNameTemplate,
    Categories,
    CustomFields,
    SupportRoles,
    PingRoles,
    ClaimEnabled,
    TranscriptEnabled,
    TicketCounter,
    CreatedAt,
}
