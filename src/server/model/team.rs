//! Team domain models and parameters.

use crate::{
    model::team::{TeamDetailDto, TeamDto, TeamInputDto},
    server::{
        error::AppError,
        model::{employee::Employee, user::User},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Team with the employees and users assigned to it.
#[derive(Debug, Clone)]
pub struct TeamWithMembers {
    pub team: Team,
    pub employees: Vec<Employee>,
    pub users: Vec<User>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDetailDto {
        TeamDetailDto {
            id: self.team.id,
            name: self.team.name,
            employees: self.employees.into_iter().map(Employee::into_dto).collect(),
            users: self.users.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Team name as submitted in a batch or a rename request.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamParams {
    pub name: String,
}

impl TeamParams {
    pub fn from_dto(dto: TeamInputDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }

    pub fn into_dto(self) -> TeamInputDto {
        TeamInputDto { name: self.name }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::BadRequest("Team name must not be blank".to_string()));
        }
        Ok(())
    }
}
