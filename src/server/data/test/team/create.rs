use super::*;

/// Tests creating and renaming a team.
///
/// Expected: Ok with new name, duplicate names rejected
#[tokio::test]
async fn creates_and_renames_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(TeamParams {
            name: "Night shift".to_string(),
        })
        .await?;

    let renamed = repo
        .rename(
            team.id,
            TeamParams {
                name: "Day shift".to_string(),
            },
        )
        .await?
        .unwrap();
    assert_eq!(renamed.name, "Day shift");

    let duplicate = repo
        .create(TeamParams {
            name: "Day shift".to_string(),
        })
        .await;
    assert!(duplicate.is_err());

    assert!(repo
        .rename(
            team.id + 1,
            TeamParams {
                name: "Ghost".to_string()
            }
        )
        .await?
        .is_none());

    Ok(())
}
