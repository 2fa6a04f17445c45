use super::*;

/// Expect title, sheet & column mapping to be replaced
#[tokio::test]
async fn updates_estimate() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Estimate)?;
    let estimate = test.estimate().insert_estimate("Draft").await?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo
        .update(
            estimate.id,
            EstimateDto {
                title: "Final".to_string(),
                sheet_url: Some("https://sheets.example.com/1".to_string()),
                column_mapping: serde_json::json!({ "name": "B", "quantity": "D" }),
            },
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.id, estimate.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.column_mapping["quantity"], "D");

    Ok(())
}

/// Expect None when updating an estimate that does not exist
#[tokio::test]
async fn returns_none_for_missing_estimate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Estimate)?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo
        .update(uuid::Uuid::new_v4(), EstimateDto::new("Nothing"))
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect the sync timestamp to be set
#[tokio::test]
async fn marks_estimate_synced() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Estimate)?;
    let estimate = test.estimate().insert_estimate("Synced").await?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo.mark_synced(estimate.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().unwrap().last_synced_at.is_some());

    Ok(())
}
