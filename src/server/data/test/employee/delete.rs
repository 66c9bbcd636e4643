use super::*;
use test_utils::factory::order::OrderFactory;

/// Tests deleting an employee who collects an order.
///
/// Verifies the employee row is removed and the order survives with no collector.
///
/// Expected: Ok(true), order.collector_id is None
#[tokio::test]
async fn deletes_employee_and_clears_collector() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let order = OrderFactory::new(db)
        .collector_id(Some(employee.id))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    assert!(repo.delete(employee.id).await?);
    assert!(repo.find_by_id(employee.id).await?.is_none());

    let order = crate::server::data::order::OrderRepository::new(db)
        .find_by_id(order.id)
        .await?
        .unwrap();
    assert!(order.collector_id.is_none());

    Ok(())
}

/// Tests deleting a missing employee.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Employee)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}
