use super::*;

/// Tests that list filters honour the inclusive date range and keeper.
///
/// Expected: only orders inside the range (and of the keeper, when given)
#[tokio::test]
async fn filters_by_range_and_keeper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let keeper = factory::user::create_user(db).await?;
    OrderFactory::new(db).order_date(date(1)).build().await?;
    let kept = OrderFactory::new(db)
        .order_date(date(5))
        .user_id(Some(keeper.id))
        .build()
        .await?;
    OrderFactory::new(db).order_date(date(10)).build().await?;
    OrderFactory::new(db).order_date(date(20)).build().await?;

    let repo = OrderRepository::new(db);

    let all = repo.get_filtered(OrderFilter::default()).await?;
    assert_eq!(all.len(), 4);

    let in_range = repo
        .get_filtered(OrderFilter {
            range: Some(march(1, 10)),
            user_id: None,
        })
        .await?;
    assert_eq!(in_range.len(), 3);

    let of_keeper = repo
        .get_filtered(OrderFilter {
            range: Some(march(1, 10)),
            user_id: Some(keeper.id),
        })
        .await?;
    assert_eq!(of_keeper.len(), 1);
    assert_eq!(of_keeper[0].id, kept.id);

    Ok(())
}

/// Tests the assembly list only returns orders with a collector.
///
/// Expected: the single assigned order in range
#[tokio::test]
async fn assembly_requires_collector() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let assigned = OrderFactory::new(db)
        .order_date(date(2))
        .collector_id(Some(employee.id))
        .build()
        .await?;
    OrderFactory::new(db).order_date(date(2)).build().await?;
    OrderFactory::new(db)
        .order_date(date(25))
        .collector_id(Some(employee.id))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_assembly(march(1, 3)).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, assigned.id);

    Ok(())
}

/// Tests the checked list filters by the done flag.
///
/// Expected: one checked and one unchecked order
#[tokio::test]
async fn checked_filters_by_done() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let done = OrderFactory::new(db).order_date(date(4)).done(true).build().await?;
    let open = OrderFactory::new(db).order_date(date(4)).build().await?;

    let repo = OrderRepository::new(db);

    let checked = repo.get_checked(march(4, 4), true).await?;
    assert_eq!(checked.iter().map(|o| o.id).collect::<Vec<_>>(), vec![done.id]);

    let unchecked = repo.get_checked(march(4, 4), false).await?;
    assert_eq!(unchecked.iter().map(|o| o.id).collect::<Vec<_>>(), vec![open.id]);

    Ok(())
}

/// Tests that orders are selected by document kind.
///
/// Expected: only orders whose vid_doc is in the list; empty list yields nothing
#[tokio::test]
async fn selects_by_vid_doc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let invoice = OrderFactory::new(db)
        .order_date(date(6))
        .vid_doc("invoice")
        .build()
        .await?;
    OrderFactory::new(db)
        .order_date(date(6))
        .vid_doc("return")
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    let orders = repo
        .get_by_vid_docs(march(1, 31), vec!["invoice".to_string()])
        .await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, invoice.id);

    let none = repo.get_by_vid_docs(march(1, 31), Vec::new()).await?;
    assert!(none.is_empty());

    Ok(())
}
