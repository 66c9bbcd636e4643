//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration, credential lookup, profile edits, session flags, blocking,
//! password changes and role assignment, converting entity models to domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    role::Role,
    user::{CreateUserParams, UpdateUserParams, User, UserCredentials},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - User fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed; an existing email is a unique constraint violation
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            name: ActiveValue::Set(params.name),
            last_name: ActiveValue::Set(params.last_name),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            admin: ActiveValue::Set(params.admin),
            logged_in: ActiveValue::Set(false),
            restore: ActiveValue::Set(false),
            blocked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;
        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email for login.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let password_hash = entity.password_hash.clone();
            UserCredentials {
                user: User::from_entity(entity),
                password_hash,
            }
        }))
    }

    /// Gets the stored password hash of a user by id.
    pub async fn get_password_hash(&self, id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;
        Ok(entity.map(|entity| entity.password_hash))
    }

    /// Checks whether at least one admin exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets all users with pagination.
    ///
    /// Returns a paginated list of all users, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }

    /// Gets the users with the given ids, ordered by name.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the blocked flag.
    ///
    /// # Returns
    /// - `Ok(true)` - User updated
    /// - `Ok(false)` - No user with that id
    pub async fn set_blocked(&self, id: i32, blocked: bool) -> Result<bool, DbErr> {
        self.update_flag(id, entity::user::Column::Blocked, blocked)
            .await
    }

    /// Sets the logged-in flag, toggled on login and logout.
    pub async fn set_logged_in(&self, id: i32, logged_in: bool) -> Result<bool, DbErr> {
        self.update_flag(id, entity::user::Column::LoggedIn, logged_in)
            .await
    }

    /// Replaces the password hash.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `password_hash` - New Argon2 hash
    /// - `restore` - True when the password is a temporary one issued by an admin
    ///
    /// # Returns
    /// - `Ok(true)` - Password replaced
    /// - `Ok(false)` - No user with that id
    pub async fn update_password(
        &self,
        id: i32,
        password_hash: String,
        restore: bool,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::user::Column::Restore, Expr::value(restore))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the name and contact fields of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::FirstName, Expr::value(params.first_name))
            .col_expr(entity::user::Column::Name, Expr::value(params.name))
            .col_expr(entity::user::Column::LastName, Expr::value(params.last_name))
            .col_expr(entity::user::Column::Phone, Expr::value(params.phone))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Roles assigned to a user, ordered by name.
    pub async fn get_roles(&self, user_id: i32) -> Result<Vec<Role>, DbErr> {
        let role_ids: Vec<i32> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.role_id)
            .collect();

        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    /// Assigns a role. Assigning it twice is a unique constraint violation.
    pub async fn add_role(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn remove_role(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn update_flag(
        &self,
        id: i32,
        column: entity::user::Column,
        value: bool,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(column, Expr::value(value))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
