use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::FirstName))
                    .col(string(User::Name))
                    .col(string(User::LastName))
                    .col(string(User::Phone))
                    .col(string(User::PasswordHash))
                    .col(boolean(User::Admin).default(false))
                    .col(boolean(User::LoggedIn).default(false))
                    .col(boolean(User::Restore).default(false))
                    .col(boolean(User::Blocked).default(false))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    FirstName,
    Name,
    LastName,
    Phone,
    PasswordHash,
    Admin,
    LoggedIn,
    Restore,
    Blocked,
    CreatedAt,
    UpdatedAt,
}
