use super::*;

/// Tests the enabled check for the literal "true" value.
///
/// Expected: Ok(true) only for "true", Ok(false) for other values
#[tokio::test]
async fn only_literal_true_enables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, RECRUITMENT_ACTIVE_KEY, "true").await?;
    factory::create_setting(db, "other_flag", "yes").await?;

    let repo = BotSettingRepository::new(db);

    assert!(repo.is_enabled(RECRUITMENT_ACTIVE_KEY).await?);
    assert!(!repo.is_enabled("other_flag").await?);

    Ok(())
}

/// Tests that a missing key reads as disabled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_key_is_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotSettingRepository::new(db);

    assert!(!repo.is_enabled(RECRUITMENT_ACTIVE_KEY).await?);

    Ok(())
}
