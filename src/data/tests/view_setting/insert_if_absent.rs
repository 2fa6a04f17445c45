use super::*;

/// Expect existing pairs to be left untouched and only new pairs inserted
#[tokio::test]
async fn ignores_existing_pairs() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, section, items, view) = test.estimate().insert_priced_estimate().await?;
    test.estimate()
        .insert_section_setting(view.id, section.id, true)
        .await?;

    let setting_repo = ViewSettingRepository::new(&test.state.db);
    let sections_inserted = setting_repo
        .insert_sections_if_absent(vec![(view.id, section.id, false)])
        .await?;
    let items_inserted = setting_repo
        .insert_items_if_absent(
            items
                .iter()
                .map(|item| ItemSetting {
                    view_id: view.id,
                    item_id: item.id,
                    price: Decimal::ZERO,
                    total: Decimal::ZERO,
                    visible: false,
                })
                .collect(),
        )
        .await?;

    assert_eq!(sections_inserted, 0);
    assert_eq!(items_inserted, 0);

    let section_setting = setting_repo.get_section(view.id, section.id).await?;
    assert!(section_setting.unwrap().visible);
    let item_setting = setting_repo.get_item(view.id, items[0].id).await?;
    assert_eq!(item_setting.unwrap().total, Decimal::from(100));

    Ok(())
}

/// Expect an empty batch to insert nothing
#[tokio::test]
async fn accepts_empty_batches() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let setting_repo = ViewSettingRepository::new(&test.state.db);

    assert_eq!(setting_repo.insert_sections_if_absent(Vec::new()).await?, 0);
    assert_eq!(setting_repo.insert_items_if_absent(Vec::new()).await?, 0);

    Ok(())
}
