//! Project domain models and parameters.
//!
//! A project groups users and grants them visibility of orders whose document kind
//! (`vid_doc`) matches the project's.

use crate::{
    model::project::{ProjectDetailDto, ProjectDto, ProjectInputDto},
    server::{error::AppError, model::user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub vid_doc: String,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            vid_doc: entity.vid_doc,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            vid_doc: self.vid_doc,
        }
    }
}

/// Project together with its member users.
#[derive(Debug, Clone)]
pub struct ProjectWithUsers {
    pub project: Project,
    pub users: Vec<User>,
}

impl ProjectWithUsers {
    pub fn into_dto(self) -> ProjectDetailDto {
        ProjectDetailDto {
            id: self.project.id,
            name: self.project.name,
            vid_doc: self.project.vid_doc,
            users: self.users.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Parameters for creating or updating a project.
#[derive(Debug, Clone)]
pub struct ProjectParams {
    pub name: String,
    pub vid_doc: String,
}

impl ProjectParams {
    /// Validates the request body.
    ///
    /// # Returns
    /// - `Ok(ProjectParams)` - Trimmed parameters
    /// - `Err(AppError::BadRequest)` - Name is blank
    pub fn from_dto(dto: ProjectInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Project name must not be blank".to_string()));
        }

        Ok(Self {
            name,
            vid_doc: dto.vid_doc.trim().to_string(),
        })
    }
}
