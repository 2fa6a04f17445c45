use super::*;

/// Expect success when creating an estimate, without legacy tokens and with an empty mapping
#[tokio::test]
async fn creates_estimate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Estimate)?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo
        .create(TEST_OWNER_ID, EstimateDto::new("Kitchen"))
        .await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.title, "Kitchen");
    assert_eq!(created.owner_id, TEST_OWNER_ID);
    assert_eq!(created.customer_token, None);
    assert_eq!(created.column_mapping, serde_json::json!({}));
    assert_eq!(created.last_synced_at, None);

    Ok(())
}

/// Expect the estimate count to follow inserts
#[tokio::test]
async fn counts_estimates() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Estimate)?;
    let estimate_repo = EstimateRepository::new(&test.state.db);
    assert_eq!(estimate_repo.count().await?, 0);

    test.estimate().insert_estimate("First").await?;
    test.estimate().insert_estimate("Second").await?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    assert_eq!(estimate_repo.count().await?, 2);
    assert_eq!(estimate_repo.get_all().await?.len(), 2);

    Ok(())
}
