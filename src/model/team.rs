use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{employee::EmployeeDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
}

/// A team with the employees and users assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDetailDto {
    pub id: i32,
    pub name: String,
    pub employees: Vec<EmployeeDto>,
    pub users: Vec<UserDto>,
}

/// Body for creating (as a batch item) or renaming a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamInputDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamEmployeeDto {
    pub employee_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamUserDto {
    pub user_id: i32,
}
