use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
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

/// Body for creating (as a batch item) or updating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeInputDto {
    /// Unique personnel code.
    pub code: String,
    pub first_name: String,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub inn: String,
    #[serde(default)]
    pub phone: String,
}
