use super::*;

/// Tests inserting a complete application.
///
/// Verifies that the repository stores all answered fields and stamps the
/// application with pending status.
///
/// Expected: Ok(Application) with pending status and matching fields
#[tokio::test]
async fn creates_pending_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RecruitmentApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecruitmentApplicationRepository::new(db);
    let application = repo
        .insert(NewApplicationParam {
            discord_user_id: "123456789".to_string(),
            discord_username: "applicant#0001".to_string(),
            surname: Some("Stone".to_string()),
            ign: "RockSolid".to_string(),
            role: Some("Duelist".to_string()),
            rank: Some("Diamond 2".to_string()),
            tracker_link: None,
        })
        .await?;

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.ign, "RockSolid");
    assert_eq!(application.surname.as_deref(), Some("Stone"));
    assert!(application.tracker_link.is_none());

    Ok(())
}

/// Tests inserting an application with every optional field skipped.
///
/// Expected: Ok(Application) with None for all skipped fields
#[tokio::test]
async fn stores_skipped_fields_as_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RecruitmentApplication)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecruitmentApplicationRepository::new(db);
    let application = repo
        .insert(NewApplicationParam {
            discord_user_id: "123456789".to_string(),
            discord_username: "applicant#0001".to_string(),
            surname: None,
            ign: "RockSolid".to_string(),
            role: None,
            rank: None,
            tracker_link: None,
        })
        .await?;

    assert!(application.surname.is_none());
    assert!(application.role.is_none());
    assert!(application.rank.is_none());
    assert!(application.tracker_link.is_none());

    Ok(())
}
