//! Project service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::project::{Project, ProjectParams, ProjectWithUsers},
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ProjectParams) -> Result<Project, AppError> {
        Ok(ProjectRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).get_all().await?)
    }

    /// Loads a project with its member users.
    ///
    /// # Returns
    /// - `Ok(ProjectWithUsers)` - Project and users
    /// - `Err(AppError::NotFound)` - No project with that id
    pub async fn get(&self, id: i32) -> Result<ProjectWithUsers, AppError> {
        let project_repo = ProjectRepository::new(self.db);

        let project = project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| project_not_found(id))?;

        let user_ids = project_repo.get_user_ids(id).await?;
        let users = UserRepository::new(self.db).get_by_ids(user_ids).await?;

        Ok(ProjectWithUsers { project, users })
    }

    pub async fn update(&self, id: i32, params: ProjectParams) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| project_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(project_not_found(id));
        }
        Ok(())
    }

    /// Adds a user to a project.
    ///
    /// # Returns
    /// - `Ok(())` - Membership stored
    /// - `Err(AppError::NotFound)` - Project or user missing
    /// - `Err(AppError::DbErr)` - User already a member (409)
    pub async fn add_user(&self, project_id: i32, user_id: i32) -> Result<(), AppError> {
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(project_not_found(project_id));
        }
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        project_repo.add_user(project_id, user_id).await?;
        Ok(())
    }

    pub async fn remove_user(&self, project_id: i32, user_id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db)
            .remove_user(project_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of project {}",
                user_id, project_id
            )));
        }
        Ok(())
    }
}

fn project_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Project {} not found", id))
}
