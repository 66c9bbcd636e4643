use super::*;

/// Tests creating a new employee.
///
/// Verifies that the repository stores every field and returns the generated id.
///
/// Expected: Ok with employee created
#[tokio::test]
async fn creates_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo.create(params("EMP-100")).await?;

    assert!(employee.id > 0);
    assert_eq!(employee.code, "EMP-100");
    assert_eq!(employee.first_name, "Ivan");
    assert_eq!(employee.created_at, employee.updated_at);

    Ok(())
}

/// Tests that a duplicate code is rejected by the unique constraint.
///
/// Expected: Err classified as UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    repo.create(params("EMP-200")).await?;

    let result = repo.create(params("EMP-200")).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
