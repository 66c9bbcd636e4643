use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_uniq(Employee::Code))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::Name))
                    .col(string(Employee::LastName).default(""))
                    .col(string(Employee::Inn).default(""))
                    .col(string(Employee::Phone).default(""))
                    .col(timestamp_with_time_zone(Employee::CreatedAt))
                    .col(timestamp_with_time_zone(Employee::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    #[sea_orm(iden = "employees")]
    Table,
    Id,
    Code,
    FirstName,
    Name,
    LastName,
    Inn,
    Phone,
    CreatedAt,
    UpdatedAt,
}
