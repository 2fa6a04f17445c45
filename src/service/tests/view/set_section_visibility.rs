use super::*;

/// Expect repeating the call to leave one unchanged row
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, section, _, view) = test.estimate().insert_priced_estimate().await?;

    let view_service = ViewService::new(&test.state.db);
    let first = view_service
        .set_section_visibility(view.id, section.id, false)
        .await
        .unwrap();
    let second = view_service
        .set_section_visibility(view.id, section.id, false)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        entity::prelude::ViewSectionSetting::find()
            .count(&test.state.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect NotFound when the section belongs to another estimate
#[tokio::test]
async fn fails_for_section_of_other_estimate() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, _, view) = test.estimate().insert_priced_estimate().await?;
    let other = test.estimate().insert_estimate("Other").await?;
    let foreign_section = test.estimate().insert_section(other.id, "Roof", 0).await?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service
        .set_section_visibility(view.id, foreign_section.id, false)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));
    assert_eq!(
        entity::prelude::ViewSectionSetting::find()
            .count(&test.state.db)
            .await?,
        0
    );

    Ok(())
}

/// Expect NotFound when the view does not exist
#[tokio::test]
async fn fails_for_missing_view() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, section, _, _) = test.estimate().insert_priced_estimate().await?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service
        .set_section_visibility(uuid::Uuid::new_v4(), section.id, true)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
