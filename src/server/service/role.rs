//! Role service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::role::RoleRepository, error::AppError, model::role::Role};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role.
    ///
    /// # Returns
    /// - `Ok(Role)` - Created role
    /// - `Err(AppError::BadRequest)` - Name blank
    /// - `Err(AppError::DbErr)` - Name already taken (409)
    pub async fn create(&self, name: &str) -> Result<Role, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Role name must not be blank".to_string()));
        }

        Ok(RoleRepository::new(self.db).create(name.to_string()).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RoleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Role {} not found", id)));
        }
        Ok(())
    }
}
