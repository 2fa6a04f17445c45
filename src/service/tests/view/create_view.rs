use super::*;

/// Expect views to receive distinct tokens and increasing sort orders
#[tokio::test]
async fn creates_views_in_order() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Cottage").await?;

    let view_service = ViewService::new(&test.state.db);
    let first = view_service
        .create_view(estimate.id, "Customer", None)
        .await
        .unwrap();
    let second = view_service
        .create_view(estimate.id, " Foreman ", Some("  ".to_string()))
        .await
        .unwrap();

    assert_eq!(first.sort_order, 0);
    assert_eq!(second.sort_order, 1);
    assert_eq!(second.name, "Foreman");
    assert_eq!(second.password, None);
    assert_ne!(first.token, second.token);
    assert_eq!(first.token.len(), 32);

    let views = view_service.get_views(estimate.id).await.unwrap();
    let view_ids: Vec<_> = views.iter().map(|view| view.id).collect();
    assert_eq!(view_ids, vec![first.id, second.id]);

    let found = view_service.find_view_by_token(&first.token).await.unwrap();
    assert_eq!(found.id, first.id);

    Ok(())
}

/// Expect NotFound when the estimate does not exist
#[tokio::test]
async fn fails_for_missing_estimate() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service
        .create_view(uuid::Uuid::new_v4(), "Customer", None)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));
    assert_eq!(
        entity::prelude::EstimateView::find()
            .count(&test.state.db)
            .await?,
        0
    );

    Ok(())
}

/// Expect ValidationFailed for a blank name
#[tokio::test]
async fn fails_for_blank_name() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Cottage").await?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service.create_view(estimate.id, "  ", None).await;

    assert!(matches!(result, Err(Error::ValidationFailed(_))));

    Ok(())
}

/// Expect NotFound for an unknown token
#[tokio::test]
async fn fails_for_unknown_token() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service.find_view_by_token("nope").await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect rename, password & delete to act on the view
#[tokio::test]
async fn edits_and_deletes_view() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, _, view) = test.estimate().insert_priced_estimate().await?;

    let view_service = ViewService::new(&test.state.db);
    let renamed = view_service.rename_view(view.id, "Client").await.unwrap();
    let protected = view_service
        .set_password(view.id, Some("pin".to_string()))
        .await
        .unwrap();

    assert_eq!(renamed.name, "Client");
    assert_eq!(protected.password.as_deref(), Some("pin"));

    assert!(view_service.delete_view(view.id).await.is_ok());
    assert!(matches!(
        view_service.delete_view(view.id).await,
        Err(Error::NotFound(_))
    ));
    assert_eq!(
        entity::prelude::ViewItemSetting::find()
            .count(&test.state.db)
            .await?,
        0
    );

    Ok(())
}
