use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_team_table::Team;
use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTeam::Table)
                    .if_not_exists()
                    .col(integer(UserTeam::TeamId))
                    .col(integer(UserTeam::UserId))
                    .primary_key(
                        Index::create()
                            .col(UserTeam::TeamId)
                            .col(UserTeam::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_team_team_id")
                            .from(UserTeam::Table, UserTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_team_user_id")
                            .from(UserTeam::Table, UserTeam::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserTeam {
    #[sea_orm(iden = "user_teams")]
    Table,
    TeamId,
    UserId,
}
