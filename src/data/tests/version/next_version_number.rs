use super::*;

/// Expect numbering to start at 1
#[tokio::test]
async fn starts_at_one() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Fresh").await?;

    let version_repo = VersionRepository::new(&test.state.db);
    let result = version_repo.next_version_number(estimate.id).await;

    assert_eq!(result?, 1);

    Ok(())
}

/// Expect numbering to continue per estimate
#[tokio::test]
async fn continues_per_estimate() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Versioned").await?;
    let other = test.estimate().insert_estimate("Other").await?;

    let version_repo = VersionRepository::new(&test.state.db);
    version_repo.create(estimate.id, 1, None).await?;
    version_repo.create(estimate.id, 2, None).await?;
    version_repo.create(other.id, 1, None).await?;

    assert_eq!(version_repo.next_version_number(estimate.id).await?, 3);
    assert_eq!(version_repo.next_version_number(other.id).await?, 2);

    Ok(())
}
