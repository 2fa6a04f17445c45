use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect one image per (estimate, type), replaced on repeat
#[tokio::test]
async fn replaces_image_of_same_type() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Stamped").await?;

    let image_repo = ActImageRepository::new(&test.state.db);
    image_repo
        .upsert(estimate.id, ActImageType::Stamp, "Zmlyc3Q=".to_string())
        .await?;
    let result = image_repo
        .upsert(estimate.id, ActImageType::Stamp, "c2Vjb25k".to_string())
        .await;
    image_repo
        .upsert(estimate.id, ActImageType::Signature, "c2lnbg==".to_string())
        .await?;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().data, "c2Vjb25k");
    assert_eq!(
        entity::prelude::ActImage::find()
            .count(&test.state.db)
            .await?,
        2
    );

    Ok(())
}

/// Expect deleting one type to keep the other
#[tokio::test]
async fn deletes_single_type() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Stamped").await?;

    let image_repo = ActImageRepository::new(&test.state.db);
    image_repo
        .upsert(estimate.id, ActImageType::Stamp, "c3RhbXA=".to_string())
        .await?;
    image_repo
        .upsert(estimate.id, ActImageType::Signature, "c2lnbg==".to_string())
        .await?;

    let result = image_repo.delete(estimate.id, ActImageType::Stamp).await?;

    assert_eq!(result.rows_affected, 1);
    let remaining = image_repo.get_many_by_estimate_id(estimate.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].image_type, "signature");

    Ok(())
}
