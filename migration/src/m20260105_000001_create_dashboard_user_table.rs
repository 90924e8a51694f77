use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardUser::Table)
                    .if_not_exists()
                    .col(pk_auto(DashboardUser::Id))
                    .col(string_uniq(DashboardUser::Username))
                    .col(string_uniq(DashboardUser::Email))
                    .col(string(DashboardUser::PasswordHash))
                    .col(string(DashboardUser::PasswordSalt))
                    .col(boolean(DashboardUser::IsAdmin))
                    .col(
                        timestamp(DashboardUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DashboardUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DashboardUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    PasswordSalt,
    IsAdmin,
    CreatedAt,
}
