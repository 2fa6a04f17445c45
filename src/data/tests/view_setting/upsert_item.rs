use super::*;

/// Expect an existing item setting to be overwritten in place
#[tokio::test]
async fn overwrites_item_setting() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, items, view) = test.estimate().insert_priced_estimate().await?;

    let setting_repo = ViewSettingRepository::new(&test.state.db);
    let result = setting_repo
        .upsert_item(ItemSetting {
            view_id: view.id,
            item_id: items[0].id,
            price: Decimal::from(8),
            total: Decimal::from(80),
            visible: false,
        })
        .await;

    assert!(result.is_ok());
    let setting = result.unwrap();
    assert_eq!(setting.total, Decimal::from(80));
    assert!(!setting.visible);
    assert_eq!(
        entity::prelude::ViewItemSetting::find()
            .count(&test.state.db)
            .await?,
        2
    );

    Ok(())
}
