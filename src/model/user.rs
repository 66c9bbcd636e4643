use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{project::ProjectDto, role::RoleDto, team::TeamDto};

/// Public view of a user. The password hash is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub admin: bool,
    pub logged_in: bool,
    /// Set while the user is on a temporary password issued by an admin.
    pub restore: bool,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user together with their memberships.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    pub roles: Vec<RoleDto>,
    pub teams: Vec<TeamDto>,
    pub projects: Vec<ProjectDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    /// One-time code printed at startup while no admin exists; grants admin when valid.
    #[serde(default)]
    pub admin_code: Option<String>,
}

/// Contact and name fields a user may edit after registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub first_name: String,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetBlockedDto {
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

/// Returned once when an admin resets a user's password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetDto {
    pub temporary_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignRoleDto {
    pub role_id: i32,
}
