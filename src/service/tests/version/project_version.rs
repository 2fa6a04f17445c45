use super::*;

/// Expect a version to project the prices it had when taken
#[tokio::test]
async fn projects_snapshot_prices() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, items, view) = test.estimate().insert_priced_estimate().await?;

    let version_service = VersionService::new(&test.state.db);
    let version = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();

    ViewService::new(&test.state.db)
        .set_item_override(view.id, items[1].id, Decimal::ONE, Decimal::from(500), true)
        .await
        .unwrap();

    let snapshot = version_service.read_version(version.id).await.unwrap();
    let projected = version_service
        .project_version(version.id, snapshot.views[0].id)
        .await
        .unwrap();

    assert_eq!(projected.total, Decimal::from(200));
    assert_eq!(projected.view_name, "Customer");
    assert_eq!(projected.sections[0].items.len(), 2);

    Ok(())
}

/// Expect NotFound for a view of another version
#[tokio::test]
async fn fails_for_view_of_other_version() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;

    let version_service = VersionService::new(&test.state.db);
    let first = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();
    let second = version_service
        .create_version(estimate.id, None)
        .await
        .unwrap();
    let second_snapshot = version_service.read_version(second.id).await.unwrap();

    let result = version_service
        .project_version(first.id, second_snapshot.views[0].id)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
