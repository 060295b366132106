use super::*;

/// Tests retrieving the newest of several applications for one user.
///
/// Verifies that applications from other users are ignored and the most
/// recently created application wins.
///
/// Expected: Ok(Some(Application)) with the newest IGN
#[tokio::test]
async fn returns_newest_application_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RecruitmentApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ApplicationFactory::new(db)
        .discord_user_id("111")
        .ign("FirstTry")
        .build()
        .await?;
    ApplicationFactory::new(db)
        .discord_user_id("111")
        .ign("SecondTry")
        .status("rejected")
        .build()
        .await?;
    ApplicationFactory::new(db)
        .discord_user_id("222")
        .ign("SomeoneElse")
        .build()
        .await?;

    let repo = RecruitmentApplicationRepository::new(db);
    let latest = repo.find_latest_by_user("111").await?;

    let latest = latest.unwrap();
    assert_eq!(latest.ign, "SecondTry");
    assert_eq!(latest.status, ApplicationStatus::Rejected);

    Ok(())
}

/// Tests querying for a user with no applications.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RecruitmentApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecruitmentApplicationRepository::new(db);
    let latest = repo.find_latest_by_user("111").await?;

    assert!(latest.is_none());

    Ok(())
}
