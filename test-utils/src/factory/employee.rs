//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    first_name: String,
    name: String,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - code: `"EMP-{id}"`
    /// - first_name: `"First {id}"`
    /// - name: `"Employee {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("EMP-{}", id),
            first_name: format!("First {}", id),
            name: format!("Employee {}", id),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();
        entity::employee::ActiveModel {
            code: ActiveValue::Set(self.code),
            first_name: ActiveValue::Set(self.first_name),
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(String::new()),
            inn: ActiveValue::Set(String::new()),
            phone: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
