use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;
use super::m20250301_000004_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProject::Table)
                    .if_not_exists()
                    .col(integer(UserProject::UserId))
                    .col(integer(UserProject::ProjectId))
                    .primary_key(
                        Index::create()
                            .col(UserProject::UserId)
                            .col(UserProject::ProjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_project_user_id")
                            .from(UserProject::Table, UserProject::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_project_project_id")
                            .from(UserProject::Table, UserProject::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProject {
    #[sea_orm(iden = "user_projects")]
    Table,
    UserId,
    ProjectId,
}
