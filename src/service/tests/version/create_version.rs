use super::*;

/// Expect version numbers to start at 1 and increase per estimate
#[tokio::test]
async fn numbers_versions_sequentially() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;
    let other = test.estimate().insert_estimate("Other").await?;

    let version_service = VersionService::new(&test.state.db);
    let first = version_service
        .create_version(estimate.id, Some(" Draft ".to_string()))
        .await
        .unwrap();
    let second = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();
    let other_first = version_service.create_version(other.id, None).await.unwrap();

    assert_eq!(first.version_number, 1);
    assert_eq!(first.label.as_deref(), Some("Draft"));
    assert_eq!(second.version_number, 2);
    assert_eq!(other_first.version_number, 1);

    let versions = version_service.get_versions(estimate.id).await.unwrap();
    let numbers: Vec<i32> = versions.iter().map(|v| v.version_number).collect();
    assert_eq!(numbers, vec![2, 1]);

    Ok(())
}

/// Expect the snapshot to copy every row with references remapped onto snapshot IDs
#[tokio::test]
async fn copies_estimate_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, items, view) = test.estimate().insert_priced_estimate().await?;
    test.estimate()
        .insert_section_setting(view.id, section.id, true)
        .await?;

    let version_service = VersionService::new(&test.state.db);
    let version = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();
    let snapshot = version_service.read_version(version.id).await.unwrap();

    assert_eq!(snapshot.sections.len(), 1);
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.views.len(), 1);
    assert_eq!(snapshot.section_settings.len(), 1);
    assert_eq!(snapshot.item_settings.len(), 2);

    let version_section = &snapshot.sections[0];
    assert_eq!(version_section.original_section_id, section.id);
    assert_ne!(version_section.id, section.id);
    assert!(snapshot
        .items
        .iter()
        .all(|item| item.version_section_id == version_section.id));
    assert_eq!(snapshot.items[0].original_item_id, items[0].id);
    assert_eq!(snapshot.views[0].token, view.token);
    assert!(snapshot
        .item_settings
        .iter()
        .all(|setting| setting.version_view_id == snapshot.views[0].id));

    Ok(())
}

/// Expect later edits of the estimate to leave the snapshot unchanged
#[tokio::test]
async fn snapshot_is_immutable() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, items, view) = test.estimate().insert_priced_estimate().await?;
    let db = test.state.db.clone();

    let version_service = VersionService::new(&db);
    let version = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();
    let before = version_service.read_version(version.id).await.unwrap();

    let view_service = ViewService::new(&db);
    view_service
        .set_item_override(view.id, items[0].id, Decimal::ONE, Decimal::from(999), false)
        .await
        .unwrap();
    view_service
        .set_section_visibility(view.id, section.id, false)
        .await
        .unwrap();
    test.estimate().insert_item(&section, "Tiles", 4, 5).await?;

    let after = version_service.read_version(version.id).await.unwrap();

    assert_eq!(before, after);

    Ok(())
}

/// Expect NotFound for a missing estimate and no version rows written
#[tokio::test]
async fn fails_for_missing_estimate() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let version_service = VersionService::new(&test.state.db);
    let result = version_service
        .create_version(uuid::Uuid::new_v4(), None)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect deleting a version to remove it from the listing
#[tokio::test]
async fn deletes_version() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;

    let version_service = VersionService::new(&test.state.db);
    let version = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();

    assert!(version_service.delete_version(version.id).await.is_ok());
    assert!(version_service
        .get_versions(estimate.id)
        .await
        .unwrap()
        .is_empty());
    assert!(matches!(
        version_service.read_version(version.id).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}
