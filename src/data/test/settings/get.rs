use super::*;

/// Tests looking up an existing setting.
///
/// Verifies that the repository returns the stored value when queried with
/// a key that exists in the database.
///
/// Expected: Ok(Some(value))
#[tokio::test]
async fn finds_existing_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "motd", "welcome").await?;

    let repo = BotSettingRepository::new(db);
    let value = repo.get("motd").await?;

    assert_eq!(value.as_deref(), Some("welcome"));

    Ok(())
}

/// Tests querying for a missing setting.
///
/// Verifies that the repository returns None when queried with a key that
/// does not exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotSettingRepository::new(db);
    let value = repo.get("motd").await?;

    assert!(value.is_none());

    Ok(())
}
