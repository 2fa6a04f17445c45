use super::*;

/// Expect 0 for an estimate without views
#[tokio::test]
async fn starts_at_zero() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Empty").await?;

    let view_repo = ViewRepository::new(&test.state.db);
    let result = view_repo.next_sort_order(estimate.id).await;

    assert_eq!(result?, 0);

    Ok(())
}

/// Expect one past the highest sort order of the estimate's own views
#[tokio::test]
async fn follows_highest_sort_order() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Views").await?;
    let other = test.estimate().insert_estimate("Other").await?;
    test.estimate()
        .insert_view(estimate.id, "Customer", "views-a", 0)
        .await?;
    test.estimate()
        .insert_view(estimate.id, "Master", "views-b", 4)
        .await?;
    test.estimate()
        .insert_view(other.id, "Customer", "other-a", 9)
        .await?;

    let view_repo = ViewRepository::new(&test.state.db);
    let result = view_repo.next_sort_order(estimate.id).await;

    assert_eq!(result?, 5);

    Ok(())
}
