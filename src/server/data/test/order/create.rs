use super::*;

fn params(order_uid: i64) -> CreateOrderParams {
    CreateOrderParams {
        order_uid,
        unicum_num: 7,
        order_date: date(3),
        order_sum: 1520.75,
        driver: "Driver".to_string(),
        agent: "Agent".to_string(),
        brieforg: "ORG".to_string(),
        client_id: 11,
        client_name: "Client".to_string(),
        client_address: "Main st. 1".to_string(),
        vid_doc: "invoice".to_string(),
        status: 1,
    }
}

/// Tests importing a new order.
///
/// Verifies the order is stored unchecked and without collector or keeper.
///
/// Expected: Ok with order created
#[tokio::test]
async fn creates_unassigned_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let order = repo.create(params(9001)).await?;

    assert_eq!(order.order_uid, 9001);
    assert_eq!(order.order_date, date(3));
    assert_eq!(order.order_sum, 1520.75);
    assert!(!order.done);
    assert!(order.user_id.is_none());
    assert!(order.collector_id.is_none());

    let found = repo.find_by_uid(9001).await?;
    assert_eq!(found.map(|o| o.id), Some(order.id));

    Ok(())
}

/// Tests that the same order_uid cannot be imported twice.
///
/// Expected: Err on second insert
#[tokio::test]
async fn rejects_duplicate_order_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    repo.create(params(9002)).await?;

    let result = repo.create(params(9002)).await;
    assert!(crate::server::error::is_unique_violation(&result.unwrap_err()));

    Ok(())
}
