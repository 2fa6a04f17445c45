use super::*;

/// Expect a single row per (view, section) holding the latest visibility
#[tokio::test]
async fn upserts_section_visibility() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, section, _, view) = test.estimate().insert_priced_estimate().await?;

    let setting_repo = ViewSettingRepository::new(&test.state.db);
    let first = setting_repo.upsert_section(view.id, section.id, false).await?;
    let second = setting_repo.upsert_section(view.id, section.id, true).await?;

    assert_eq!(first.id, second.id);
    assert!(!first.visible);
    assert!(second.visible);
    assert_eq!(
        entity::prelude::ViewSectionSetting::find()
            .count(&test.state.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect Error when the section does not exist
#[tokio::test]
async fn fails_for_missing_section() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, _, view) = test.estimate().insert_priced_estimate().await?;

    let setting_repo = ViewSettingRepository::new(&test.state.db);
    let result = setting_repo
        .upsert_section(view.id, uuid::Uuid::new_v4(), true)
        .await;

    assert!(result.is_err());

    Ok(())
}
