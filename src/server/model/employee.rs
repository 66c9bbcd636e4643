//! Employee domain models and parameters.
//!
//! Employees are warehouse staff identified by a unique personnel code. They are created
//! in batches and may be assigned as collectors of orders.

use chrono::{DateTime, Utc};

use crate::{
    model::employee::{EmployeeDto, EmployeeInputDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub inn: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            first_name: entity.first_name,
            name: entity.name,
            last_name: entity.last_name,
            inn: entity.inn,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            code: self.code,
            first_name: self.first_name,
            name: self.name,
            last_name: self.last_name,
            inn: self.inn,
            phone: self.phone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Employee fields for creation (one batch item) or update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeParams {
    pub code: String,
    pub first_name: String,
    pub name: String,
    pub last_name: String,
    pub inn: String,
    pub phone: String,
}

impl EmployeeParams {
    pub fn from_dto(dto: EmployeeInputDto) -> Self {
        Self {
            code: dto.code.trim().to_string(),
            first_name: dto.first_name.trim().to_string(),
            name: dto.name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            inn: dto.inn.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        }
    }

    pub fn into_dto(self) -> EmployeeInputDto {
        EmployeeInputDto {
            code: self.code,
            first_name: self.first_name,
            name: self.name,
            last_name: self.last_name,
            inn: self.inn,
            phone: self.phone,
        }
    }

    /// Checks the required fields.
    ///
    /// # Returns
    /// - `Ok(())` - Code, first name and name are present
    /// - `Err(AppError::BadRequest)` - Names the first blank required field
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("code", &self.code),
            ("first_name", &self.first_name),
            ("name", &self.name),
        ] {
            if value.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Employee {} must not be blank",
                    field
                )));
            }
        }
        Ok(())
    }
}
