//! User service for business logic.
//!
//! Registration, login bookkeeping, password management and role assignment. Password
//! hashes stay inside this module and the data layer; callers only ever see `User`.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        project::ProjectRepository, role::RoleRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{
        validate_password, CreateUserParams, PaginatedUsers, RegisterUserParams,
        UpdateUserParams, User, UserProfile,
    },
    service::{
        admin::AdminCodeService,
        password::{generate_temporary_password, hash_password, verify_password},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// When `admin_code` is present it must match the active bootstrap code, which grants
    /// the account admin rights. The code is used up only when the account is created; a
    /// failed insert hands it back.
    ///
    /// # Arguments
    /// - `params` - Validated registration input
    /// - `admin_codes` - Bootstrap admin code holder
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AppError::BadRequest)` - Admin code supplied but invalid or expired
    /// - `Err(AppError::DbErr)` - Email already registered (409) or database error
    pub async fn register(
        &self,
        params: RegisterUserParams,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let claim = match params.admin_code.as_deref() {
            Some(code) => match admin_codes.claim(code).await {
                Some(claim) => Some(claim),
                None => {
                    return Err(AppError::BadRequest(
                        "Admin code is invalid or expired".to_string(),
                    ))
                }
            },
            None => None,
        };
        let admin = claim.is_some();

        let created = self.create_account(params, admin).await;

        let user = match (created, claim) {
            (Ok(user), _) => user,
            (Err(e), Some(claim)) => {
                admin_codes.release(claim).await;
                return Err(e);
            }
            (Err(e), None) => return Err(e),
        };

        if admin {
            tracing::info!("User {} registered with admin rights", user.id);
        }

        Ok(user)
    }

    async fn create_account(
        &self,
        params: RegisterUserParams,
        admin: bool,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(params.password).await?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                email: params.email,
                password_hash,
                first_name: params.first_name,
                name: params.name,
                last_name: params.last_name,
                phone: params.phone,
                admin,
            })
            .await?;

        Ok(user)
    }

    /// Verifies credentials and marks the user as logged in.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with `logged_in` set
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::UserBlocked)` - Credentials valid but the account is blocked
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = email.trim().to_lowercase();
        let Some(credentials) = user_repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut user = credentials.user;
        if user.blocked {
            return Err(AuthError::UserBlocked(user.id).into());
        }

        user_repo.set_logged_in(user.id, true).await?;
        user.logged_in = true;

        Ok(user)
    }

    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_logged_in(user_id, false)
            .await?;
        Ok(())
    }

    /// Loads a user together with roles, teams and projects.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found
    /// - `Ok(None)` - No user with that id
    pub async fn get_profile(&self, user_id: i32) -> Result<Option<UserProfile>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let roles = user_repo.get_roles(user_id).await?;
        let teams = TeamRepository::new(self.db).get_for_user(user_id).await?;
        let projects = ProjectRepository::new(self.db)
            .get_for_user(user_id)
            .await?;

        Ok(Some(UserProfile {
            user,
            roles,
            teams,
            projects,
        }))
    }

    /// Retrieves all users with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Users per page, raised to 1 if zero
    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.max(1);

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    /// Updates name and contact fields.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(user_id, params)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }

    /// Blocks or unblocks a user. Blocking also ends their logged-in state.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_blocked(&self, user_id: i32, blocked: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_blocked(user_id, blocked).await? {
            return Err(user_not_found(user_id));
        }
        if blocked {
            user_repo.set_logged_in(user_id, false).await?;
        }

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }

    /// Replaces the password with a random temporary one and flags the account for restore.
    ///
    /// # Returns
    /// - `Ok(String)` - The temporary password, returned only this once
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn reset_password(&self, user_id: i32) -> Result<String, AppError> {
        let temporary = generate_temporary_password();
        let hash = hash_password(temporary.clone()).await?;

        if !UserRepository::new(self.db)
            .update_password(user_id, hash, true)
            .await?
        {
            return Err(user_not_found(user_id));
        }

        tracing::info!("Password of user {} reset by admin", user_id);

        Ok(temporary)
    }

    /// Changes the user's own password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced and restore flag cleared
    /// - `Err(AppError::BadRequest)` - New password violates the policy
    /// - `Err(AuthError::InvalidCredentials)` - Current password wrong
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        validate_password(new_password)?;

        let user_repo = UserRepository::new(self.db);

        let Some(stored_hash) = user_repo.get_password_hash(user_id).await? else {
            return Err(user_not_found(user_id));
        };

        if !verify_password(current_password.to_string(), stored_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let hash = hash_password(new_password.to_string()).await?;
        user_repo.update_password(user_id, hash, false).await?;

        Ok(())
    }

    /// Assigns a role to a user.
    ///
    /// # Returns
    /// - `Ok(())` - Role assigned
    /// - `Err(AppError::NotFound)` - User or role missing
    /// - `Err(AppError::DbErr)` - Role already assigned (409)
    pub async fn add_role(&self, user_id: i32, role_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(user_not_found(user_id));
        }
        if RoleRepository::new(self.db)
            .find_by_id(role_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Role {} not found", role_id)));
        }

        user_repo.add_role(user_id, role_id).await?;

        Ok(())
    }

    pub async fn remove_role(&self, user_id: i32, role_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db)
            .remove_role(user_id, role_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} does not have role {}",
                user_id, role_id
            )));
        }
        Ok(())
    }
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
