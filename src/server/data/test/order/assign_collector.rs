use super::*;

/// Tests assigning a collector and keeper to an order.
///
/// Verifies that collector_id and user_id are set and `done` is left untouched.
///
/// Expected: Ok with updated order
#[tokio::test]
async fn assigns_collector_and_keeper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let employee = factory::employee::create_employee(db).await?;
    let order = OrderFactory::new(db).order_uid(4100).build().await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .assign_collector(AssignCollectorParams {
            order_uid: order.order_uid,
            user_id: user.id,
            employee_id: employee.id,
        })
        .await?;

    assert_eq!(updated.collector_id, Some(employee.id));
    assert_eq!(updated.user_id, Some(user.id));
    assert!(!updated.done);

    Ok(())
}

/// Tests assigning a collector to an unknown order.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let employee = factory::employee::create_employee(db).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .assign_collector(AssignCollectorParams {
            order_uid: 777_777,
            user_id: user.id,
            employee_id: employee.id,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
