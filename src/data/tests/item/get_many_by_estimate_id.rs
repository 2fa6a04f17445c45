use super::*;

/// Expect only the estimate's items, ordered by sort order
#[tokio::test]
async fn gets_items_of_estimate_in_order() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Estimate,
        entity::prelude::EstimateSection,
        entity::prelude::EstimateItem
    )?;
    let estimate = test.estimate().insert_estimate("Bathroom").await?;
    let other = test.estimate().insert_estimate("Other").await?;
    let section = test.estimate().insert_section(estimate.id, "Walls", 0).await?;
    let other_section = test.estimate().insert_section(other.id, "Walls", 0).await?;

    let second = test.estimate().insert_item(&section, "Paint", 1, 2).await?;
    let first = test.estimate().insert_item(&section, "Primer", 1, 1).await?;
    test.estimate()
        .insert_item(&other_section, "Elsewhere", 1, 0)
        .await?;

    let item_repo = ItemRepository::new(&test.state.db);
    let result = item_repo.get_many_by_estimate_id(estimate.id).await;

    assert!(result.is_ok());
    let ids: Vec<_> = result.unwrap().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
