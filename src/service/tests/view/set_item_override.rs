use super::*;

/// Expect repeating the call to leave the same values and row count
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Porch").await?;
    let section = test.estimate().insert_section(estimate.id, "Deck", 0).await?;
    let item = test.estimate().insert_item(&section, "Boards", 20, 0).await?;
    let view = test
        .estimate()
        .insert_view(estimate.id, "Customer", "porch-token", 0)
        .await?;

    let view_service = ViewService::new(&test.state.db);
    let first = view_service
        .set_item_override(view.id, item.id, Decimal::new(125, 1), Decimal::from(250), true)
        .await
        .unwrap();
    let second = view_service
        .set_item_override(view.id, item.id, Decimal::new(125, 1), Decimal::from(250), true)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.price, Decimal::new(125, 1));
    assert_eq!(
        entity::prelude::ViewItemSetting::find()
            .count(&test.state.db)
            .await?,
        1
    );

    Ok(())
}

/// Expect ValidationFailed for negative amounts
#[tokio::test]
async fn fails_for_negative_amounts() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, items, view) = test.estimate().insert_priced_estimate().await?;

    let view_service = ViewService::new(&test.state.db);
    let negative_price = view_service
        .set_item_override(view.id, items[0].id, Decimal::from(-1), Decimal::ZERO, true)
        .await;
    let negative_total = view_service
        .set_item_override(view.id, items[0].id, Decimal::ZERO, Decimal::from(-5), true)
        .await;

    assert!(matches!(negative_price, Err(Error::ValidationFailed(_))));
    assert!(matches!(negative_total, Err(Error::ValidationFailed(_))));

    Ok(())
}

/// Expect NotFound when the item belongs to another estimate
#[tokio::test]
async fn fails_for_item_of_other_estimate() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, _, view) = test.estimate().insert_priced_estimate().await?;
    let other = test.estimate().insert_estimate("Other").await?;
    let other_section = test.estimate().insert_section(other.id, "Roof", 0).await?;
    let foreign_item = test
        .estimate()
        .insert_item(&other_section, "Shingles", 3, 0)
        .await?;

    let view_service = ViewService::new(&test.state.db);
    let result = view_service
        .set_item_override(view.id, foreign_item.id, Decimal::ONE, Decimal::ONE, true)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
