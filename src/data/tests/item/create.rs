use super::*;

fn item_dto(name: &str) -> ItemDto {
    ItemDto {
        number: "1".to_string(),
        name: name.to_string(),
        unit: "m2".to_string(),
        quantity: Decimal::new(125, 1),
        sort_order: 0,
    }
}

/// Expect the item to inherit the estimate of its section and carry no legacy pricing
#[tokio::test]
async fn creates_item_in_section() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Estimate,
        entity::prelude::EstimateSection,
        entity::prelude::EstimateItem
    )?;
    let estimate = test.estimate().insert_estimate("Bathroom").await?;
    let section = test.estimate().insert_section(estimate.id, "Walls", 0).await?;

    let item_repo = ItemRepository::new(&test.state.db);
    let result = item_repo.create(&section, item_dto("Tiles")).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.estimate_id, estimate.id);
    assert_eq!(created.section_id, section.id);
    assert_eq!(created.quantity, Decimal::new(125, 1));
    assert_eq!(created.customer_total, None);
    assert_eq!(created.master_total, None);

    Ok(())
}

/// Expect Error when the section does not exist
#[tokio::test]
async fn fails_for_missing_section() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(
        entity::prelude::Estimate,
        entity::prelude::EstimateSection,
        entity::prelude::EstimateItem
    )?;
    let estimate = test.estimate().insert_estimate("Bathroom").await?;
    let section = factory::mock_section_model(estimate.id, "Never stored", 0);

    let item_repo = ItemRepository::new(&test.state.db);
    let result = item_repo.create(&section, item_dto("Tiles")).await;

    assert!(result.is_err());

    Ok(())
}
