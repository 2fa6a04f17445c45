use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect deleting an estimate to cascade to its sections, items and views
#[tokio::test]
async fn deletes_estimate_with_children() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo.delete(estimate.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 1);

    let db = &test.state.db;
    assert_eq!(entity::prelude::EstimateSection::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EstimateItem::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EstimateView::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ViewItemSetting::find().count(db).await?, 0);

    Ok(())
}

/// Expect no rows affected when deleting an estimate that does not exist
#[tokio::test]
async fn deletes_nothing_for_missing_estimate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Estimate)?;

    let estimate_repo = EstimateRepository::new(&test.state.db);
    let result = estimate_repo.delete(uuid::Uuid::new_v4()).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 0);

    Ok(())
}
