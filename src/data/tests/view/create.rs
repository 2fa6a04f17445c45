use super::*;

/// Expect success when creating a view and finding it again by token
#[tokio::test]
async fn creates_view_found_by_token() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Garage").await?;

    let view_repo = ViewRepository::new(&test.state.db);
    let result = view_repo
        .create(
            estimate.id,
            "Customer".to_string(),
            "garage-token".to_string(),
            Some("secret".to_string()),
            0,
        )
        .await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.password.as_deref(), Some("secret"));

    let found = view_repo.get_by_token("garage-token").await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Expect a unique constraint violation when reusing a token, even across estimates
#[tokio::test]
async fn fails_for_duplicate_token() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let first = test.estimate().insert_estimate("First").await?;
    let second = test.estimate().insert_estimate("Second").await?;
    test.estimate()
        .insert_view(first.id, "Customer", "shared-token", 0)
        .await?;

    let view_repo = ViewRepository::new(&test.state.db);
    let result = view_repo
        .create(
            second.id,
            "Customer".to_string(),
            "shared-token".to_string(),
            None,
            0,
        )
        .await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
