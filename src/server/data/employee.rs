//! Employee data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::employee::{Employee, EmployeeParams};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one employee.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Stored employee with generated id and timestamps
    /// - `Err(DbErr)` - Insert failed; a duplicate `code` is a unique constraint violation
    pub async fn create(&self, params: EmployeeParams) -> Result<Employee, DbErr> {
        let now = Utc::now();
        let entity = entity::employee::ActiveModel {
            code: ActiveValue::Set(params.code),
            first_name: ActiveValue::Set(params.first_name),
            name: ActiveValue::Set(params.name),
            last_name: ActiveValue::Set(params.last_name),
            inn: ActiveValue::Set(params.inn),
            phone: ActiveValue::Set(params.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    /// Gets all employees ordered by name, then first name.
    pub async fn get_all(&self) -> Result<Vec<Employee>, DbErr> {
        let entities = entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Name)
            .order_by_asc(entity::employee::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?;
        Ok(entity.map(Employee::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Code.eq(code))
            .one(self.db)
            .await?;
        Ok(entity.map(Employee::from_entity))
    }

    /// Gets the employees with the given ids, ordered by name.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Employee>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Id.is_in(ids))
            .order_by_asc(entity::employee::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    /// Replaces every editable field of an employee.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Updated employee
    /// - `Ok(None)` - No employee with that id
    /// - `Err(DbErr)` - Update failed, e.g. the new code is already taken
    pub async fn update(&self, id: i32, params: EmployeeParams) -> Result<Option<Employee>, DbErr> {
        let Some(existing) = entity::prelude::Employee::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::employee::ActiveModel = existing.into();
        active.code = ActiveValue::Set(params.code);
        active.first_name = ActiveValue::Set(params.first_name);
        active.name = ActiveValue::Set(params.name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.inn = ActiveValue::Set(params.inn);
        active.phone = ActiveValue::Set(params.phone);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Employee::from_entity(entity)))
    }

    /// Deletes an employee. Orders collected by them keep existing with no collector.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
