use super::*;

/// Tests storing and clearing the session user.
///
/// Expected: id readable after login and gone after clear
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);

    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(user.id).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    auth_session.clear().await?;
    assert_eq!(auth_session.get_user_id().await?, None);

    let result = AuthGuard::new(db, session).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
