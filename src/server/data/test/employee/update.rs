use super::*;

/// Tests updating an employee's fields.
///
/// Expected: Ok(Some) with new values
#[tokio::test]
async fn updates_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::employee::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let mut update = params("EMP-NEW");
    update.phone = "+7 900 000 00 00".to_string();

    let updated = repo.update(stored.id, update).await?.unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.code, "EMP-NEW");
    assert_eq!(updated.phone, "+7 900 000 00 00");

    Ok(())
}

/// Tests updating a missing employee.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.update(999, params("EMP-X")).await?;

    assert!(result.is_none());

    Ok(())
}
