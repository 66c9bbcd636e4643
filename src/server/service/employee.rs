//! Employee service for business logic.
//!
//! Employees are warehouse workers (collectors). They are usually imported in bulk, so
//! creation goes through the bulk coordinator while the remaining operations are plain
//! repository calls with not-found handling.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::employee::EmployeeRepository,
    error::AppError,
    model::{
        bulk::BulkOutcome,
        employee::{Employee, EmployeeParams},
    },
    service::bulk::{BulkSettings, BulkStore},
};

/// Bulk storage collaborator inserting one employee per call.
#[derive(Clone)]
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BulkStore<EmployeeParams> for EmployeeStore {
    type Output = Employee;

    async fn create(&self, item: EmployeeParams) -> Result<Employee, DbErr> {
        EmployeeRepository::new(&self.db).create(item).await
    }
}

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a batch of employees concurrently.
    ///
    /// The whole request is rejected before any insert if the batch is too large or any
    /// item is missing a required field. Past validation, each item succeeds or fails on
    /// its own; a duplicate `code` is reported as a conflict for that item only.
    ///
    /// # Arguments
    /// - `settings` - Batch limits and concurrency cap
    /// - `items` - Employees to create
    ///
    /// # Returns
    /// - `Ok(BulkOutcome)` - One outcome per item
    /// - `Err(AppError::BadRequest)` - Batch too large or an item failed validation
    pub async fn create_bulk(
        &self,
        settings: &BulkSettings,
        items: Vec<EmployeeParams>,
    ) -> Result<BulkOutcome<EmployeeParams, Employee>, AppError> {
        settings.validate_batch(&items, EmployeeParams::validate)?;

        let store = EmployeeStore::new(self.db.clone());
        Ok(settings.coordinator().submit(&store, items).await)
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(EmployeeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Employee, AppError> {
        EmployeeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Employee, AppError> {
        EmployeeRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with code {} not found", code)))
    }

    /// Replaces all fields of an employee.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Updated employee
    /// - `Err(AppError::BadRequest)` - Required field blank
    /// - `Err(AppError::NotFound)` - No employee with that id
    pub async fn update(&self, id: i32, params: EmployeeParams) -> Result<Employee, AppError> {
        params.validate()?;

        EmployeeRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EmployeeRepository::new(self.db).delete(id).await? {
            return Err(employee_not_found(id));
        }
        Ok(())
    }
}

fn employee_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Employee {} not found", id))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::server::model::bulk::{BulkFailureKind, BulkStatus};
    use test_utils::builder::TestBuilder;

    fn settings() -> BulkSettings {
        BulkSettings {
            max_in_flight: 4,
            max_items: 10,
            order_timeout: Duration::from_secs(30),
        }
    }

    fn params(code: &str) -> EmployeeParams {
        EmployeeParams {
            code: code.to_string(),
            first_name: "Ivan".to_string(),
            name: "Petrov".to_string(),
            last_name: String::new(),
            inn: String::new(),
            phone: String::new(),
        }
    }

    /// Tests a batch of three where the second item repeats an existing code.
    ///
    /// Expected: partial outcome with one conflict carrying the duplicate item
    #[tokio::test]
    async fn duplicate_in_batch_is_partial() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EmployeeService::new(db);
        service
            .create_bulk(&settings(), vec![params("EMP-DUP")])
            .await?;

        let outcome = service
            .create_bulk(
                &settings(),
                vec![params("EMP-A"), params("EMP-DUP"), params("EMP-B")],
            )
            .await?;

        assert_eq!(outcome.status(), BulkStatus::Partial);
        assert_eq!(outcome.added.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].item, params("EMP-DUP"));
        assert_eq!(outcome.failed[0].kind, BulkFailureKind::Conflict);
        assert!(outcome.failed[0].message.contains("UNIQUE"));

        assert_eq!(service.get_all().await?.len(), 3);

        Ok(())
    }

    /// Tests resubmitting an identical batch.
    ///
    /// Expected: every item of the second submission fails with a conflict
    #[tokio::test]
    async fn resubmitted_batch_all_conflicts() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EmployeeService::new(db);
        let batch = vec![params("EMP-1"), params("EMP-2"), params("EMP-3")];

        let first = service.create_bulk(&settings(), batch.clone()).await?;
        assert_eq!(first.status(), BulkStatus::AllSucceeded);

        let second = service.create_bulk(&settings(), batch).await?;
        assert_eq!(second.status(), BulkStatus::AllFailed);
        assert_eq!(second.failed.len(), 3);
        assert!(second
            .failed
            .iter()
            .all(|failure| failure.kind == BulkFailureKind::Conflict));

        assert_eq!(service.get_all().await?.len(), 3);

        Ok(())
    }

    /// Tests that one invalid item rejects the whole batch up front.
    ///
    /// Expected: Err(BadRequest) naming the item, nothing stored
    #[tokio::test]
    async fn invalid_item_rejects_batch() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EmployeeService::new(db);
        let mut blank = params("EMP-X");
        blank.name = String::new();

        let result = service
            .create_bulk(&settings(), vec![params("EMP-OK"), blank])
            .await;

        match result {
            Err(AppError::BadRequest(message)) => assert!(message.starts_with("Item 1")),
            other => panic!("Expected BadRequest, got: {:?}", other),
        }
        assert!(service.get_all().await?.is_empty());

        Ok(())
    }

    /// Tests not-found handling for single-record operations.
    ///
    /// Expected: Err(NotFound) for missing ids and codes
    #[tokio::test]
    async fn missing_employee_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = EmployeeService::new(db);

        assert!(matches!(service.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.get_by_code("EMP-NONE").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(1, params("EMP-1")).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
