use super::*;

/// Expect a unique constraint violation when a version number is taken
#[tokio::test]
async fn fails_for_duplicate_version_number() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Versioned").await?;

    let version_repo = VersionRepository::new(&test.state.db);
    version_repo
        .create(estimate.id, 1, Some("Initial".to_string()))
        .await?;
    let result = version_repo.create(estimate.id, 1, None).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}

/// Expect versions listed newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Versioned").await?;

    let version_repo = VersionRepository::new(&test.state.db);
    for number in 1..=3 {
        version_repo.create(estimate.id, number, None).await?;
    }

    let numbers: Vec<i32> = version_repo
        .get_many_by_estimate_id(estimate.id)
        .await?
        .into_iter()
        .map(|version| version.version_number)
        .collect();

    assert_eq!(numbers, vec![3, 2, 1]);

    Ok(())
}
