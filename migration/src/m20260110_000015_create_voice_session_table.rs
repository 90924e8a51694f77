use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoiceSession::Table)
                    .if_not_exists()
                    .col(pk_auto(VoiceSession::Id))
                    .col(string(VoiceSession::GuildId))
                    .col(string(VoiceSession::UserId))
                    .col(string(VoiceSession::ChannelId))
                    .col(boolean(VoiceSession::Eligible))
                    .col(
                        timestamp(VoiceSession::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(VoiceSession::EndedAt))
                    .col(big_integer(VoiceSession::XpEarned))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_voice_session_guild_user")
                    .table(VoiceSession::Table)
                    .col(VoiceSession::GuildId)
                    .col(VoiceSession::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoiceSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VoiceSession {
    Table,
    Id,
    GuildId,
    UserId,
    ChannelId,
    Eligible,
    StartedAt,
    EndedAt,
    XpEarned,
}
