//! User domain models and parameters.
//!
//! Users are warehouse staff who log in to the API: keepers, checkers and admins. The
//! password hash never leaves the data layer except through `UserCredentials`.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, RegisterUserDto, UpdateUserDto, UserDto, UserProfileDto},
    server::{
        error::AppError,
        model::{project::Project, role::Role, team::Team},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub admin: bool,
    pub logged_in: bool,
    pub restore: bool,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            name: entity.name,
            last_name: entity.last_name,
            phone: entity.phone,
            admin: entity.admin,
            logged_in: entity.logged_in,
            restore: entity.restore,
            blocked: entity.blocked,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            name: self.name,
            last_name: self.last_name,
            phone: self.phone,
            admin: self.admin,
            logged_in: self.logged_in,
            restore: self.restore,
            blocked: self.blocked,
            created_at: self.created_at,
        }
    }
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// User with roles, teams and projects.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub roles: Vec<Role>,
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user: self.user.into_dto(),
            roles: self.roles.into_iter().map(Role::into_dto).collect(),
            teams: self.teams.into_iter().map(Team::into_dto).collect(),
            projects: self.projects.into_iter().map(Project::into_dto).collect(),
        }
    }
}

/// Page of users plus pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Registration input, still carrying the plain password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub admin_code: Option<String>,
}

impl RegisterUserParams {
    /// Normalizes and validates the registration body.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Email lowercased, names trimmed
    /// - `Err(AppError::BadRequest)` - Email malformed, name blank or password shorter
    ///   than 8 characters
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }

        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be blank".to_string()));
        }

        validate_password(&dto.password)?;

        Ok(Self {
            email,
            password: dto.password,
            first_name: dto.first_name.trim().to_string(),
            name,
            last_name: dto.last_name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            admin_code: dto.admin_code,
        })
    }
}

/// Fields written when inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
    pub admin: bool,
}

/// Profile fields replaced by an update. Email, password and flags are not editable here.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub phone: String,
}

impl UpdateUserParams {
    /// Trims all fields.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParams)` - Trimmed fields
    /// - `Err(AppError::BadRequest)` - Name blank
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be blank".to_string()));
        }

        Ok(Self {
            first_name: dto.first_name.trim().to_string(),
            name,
            last_name: dto.last_name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        })
    }
}

/// Minimum password policy shared by registration and password change.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters long".to_string(),
        ));
    }
    Ok(())
}
