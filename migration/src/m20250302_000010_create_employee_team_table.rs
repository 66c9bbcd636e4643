use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_team_table::Team;
use super::m20250301_000005_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeTeam::Table)
                    .if_not_exists()
                    .col(integer(EmployeeTeam::TeamId))
                    .col(integer(EmployeeTeam::EmployeeId))
                    .primary_key(
                        Index::create()
                            .col(EmployeeTeam::TeamId)
                            .col(EmployeeTeam::EmployeeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_team_team_id")
                            .from(EmployeeTeam::Table, EmployeeTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_team_employee_id")
                            .from(EmployeeTeam::Table, EmployeeTeam::EmployeeId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmployeeTeam {
    #[sea_orm(iden = "employee_teams")]
    Table,
    TeamId,
    EmployeeId,
}
