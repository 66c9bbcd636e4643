use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;
use super::m20250301_000005_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(big_integer_uniq(Order::OrderUid))
                    .col(big_integer(Order::UnicumNum).default(0))
                    .col(date(Order::OrderDate))
                    .col(double(Order::OrderSum).default(0.0))
                    .col(string(Order::Driver).default(""))
                    .col(string(Order::Agent).default(""))
                    .col(string(Order::Brieforg).default(""))
                    .col(big_integer(Order::ClientId).default(0))
                    .col(string(Order::ClientName).default(""))
                    .col(string(Order::ClientAddress).default(""))
                    .col(string(Order::VidDoc).default(""))
                    .col(timestamp_with_time_zone_null(Order::StartAt))
                    .col(timestamp_with_time_zone_null(Order::FinishAt))
                    .col(boolean(Order::Done).default(false))
                    .col(integer(Order::Status).default(0))
                    .col(integer_null(Order::UserId))
                    .col(integer_null(Order::CollectorId))
                    .col(timestamp_with_time_zone(Order::CreatedAt))
                    .col(timestamp_with_time_zone(Order::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_collector_id")
                            .from(Order::Table, Order::CollectorId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_order_date")
                    .table(Order::Table)
                    .col(Order::OrderDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderUid,
    UnicumNum,
    OrderDate,
    OrderSum,
    Driver,
    Agent,
    Brieforg,
    ClientId,
    ClientName,
    ClientAddress,
    VidDoc,
    StartAt,
    FinishAt,
    Done,
    Status,
    UserId,
    CollectorId,
    CreatedAt,
    UpdatedAt,
}
