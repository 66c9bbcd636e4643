use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::role::Role;

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a role; a duplicate name surfaces as a unique constraint violation.
    pub async fn create(&self, name: String) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Role::from_entity))
    }

    /// Deletes a role, cascading to its user assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - Role deleted
    /// - `Ok(false)` - No role with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Role::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
