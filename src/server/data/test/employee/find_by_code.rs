use super::*;

/// Tests finding an employee by their personnel code.
///
/// Expected: Ok(Some) for an existing code, Ok(None) otherwise
#[tokio::test]
async fn finds_employee_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::employee::EmployeeFactory::new(db)
        .code("EMP-300")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);

    let found = repo.find_by_code("EMP-300").await?;
    assert_eq!(found.map(|e| e.id), Some(stored.id));

    let missing = repo.find_by_code("EMP-301").await?;
    assert!(missing.is_none());

    Ok(())
}
