//! Factories for teams, projects and roles.
//!
//! These entities only carry a unique name (plus `vid_doc` for projects), so plain
//! functions are provided instead of builders.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a team named `"Team {id}"`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        name: ActiveValue::Set(format!("Team {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a project granting access to orders of the given document kind.
pub async fn create_project(
    db: &DatabaseConnection,
    vid_doc: &str,
) -> Result<entity::project::Model, DbErr> {
    entity::project::ActiveModel {
        name: ActiveValue::Set(format!("Project {}", next_id())),
        vid_doc: ActiveValue::Set(vid_doc.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a role named `"Role {id}"`.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(format!("Role {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a project.
pub async fn add_user_to_project(
    db: &DatabaseConnection,
    user_id: i32,
    project_id: i32,
) -> Result<entity::user_project::Model, DbErr> {
    entity::user_project::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        project_id: ActiveValue::Set(project_id),
    }
    .insert(db)
    .await
}

/// Links an employee to a team.
pub async fn add_employee_to_team(
    db: &DatabaseConnection,
    team_id: i32,
    employee_id: i32,
) -> Result<entity::employee_team::Model, DbErr> {
    entity::employee_team::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        employee_id: ActiveValue::Set(employee_id),
    }
    .insert(db)
    .await
}
