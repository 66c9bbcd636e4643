use super::*;

/// Tests checking and unchecking an order.
///
/// Expected: `done` follows the submitted flag and the checker is recorded
#[tokio::test]
async fn toggles_done_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let checker = factory::user::create_user(db).await?;
    let order = OrderFactory::new(db).build().await?;

    let repo = OrderRepository::new(db);

    let checked = repo
        .set_check(CheckOrderParams {
            order_uid: order.order_uid,
            user_id: checker.id,
            check: true,
        })
        .await?;
    assert!(checked.done);
    assert_eq!(checked.user_id, Some(checker.id));

    let unchecked = repo
        .set_check(CheckOrderParams {
            order_uid: order.order_uid,
            user_id: checker.id,
            check: false,
        })
        .await?;
    assert!(!unchecked.done);

    Ok(())
}
