use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReactionRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ReactionRole::Id))
                    .col(string(ReactionRole::GuildId))
                    .col(string(ReactionRole::ChannelId))
                    .col(string(ReactionRole::MessageId))
                    .col(string(ReactionRole::Title))
                    .col(string(ReactionRole::Description))
                    .col(string(ReactionRole::Kind))
                    .col(string(ReactionRole::Emoji))
                    .col(string(ReactionRole::RoleId))
                    .col(string(ReactionRole::Label))
                    .col(string(ReactionRole::Color))
                    .col(
                        timestamp(ReactionRole::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reaction_role_guild_id")
                    .table(ReactionRole::Table)
                    .col(ReactionRole::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReactionRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReactionRole {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Title,
    Description,
    Kind,
    Emoji,
    RoleId,
    Label,
    Color,
    CreatedAt,
}
