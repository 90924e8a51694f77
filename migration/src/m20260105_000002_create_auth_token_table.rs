use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_dashboard_user_table::DashboardUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthToken::Table)
                    .if_not_exists()
                    .col(string(AuthToken::Token).primary_key())
                    .col(integer(AuthToken::UserId))
                    .col(
                        timestamp(AuthToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp(AuthToken::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auth_token_user_id")
                            .from(AuthToken::Table, AuthToken::UserId)
                            .to(DashboardUser::Table, DashboardUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_auth_token_user_id")
                    .table(AuthToken::Table)
                    .col(AuthToken::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuthToken {
    Table,
    Token,
    UserId,
    CreatedAt,
    ExpiresAt,
}
