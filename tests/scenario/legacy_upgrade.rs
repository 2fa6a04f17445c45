use rust_decimal::Decimal;
use smeta::{service::projection::ProjectionService, startup::prepare_database};
use smeta_test_utils::prelude::*;

/// Expect startup to convert a legacy estimate so its old share links keep working, and a
/// second startup to leave it alone
#[tokio::test]
async fn legacy_links_survive_upgrade() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test
        .estimate()
        .insert_legacy_estimate("Legacy house", Some("ctok"), Some("mtok"), Some("1234"))
        .await?;
    let roof = test.estimate().insert_section(estimate.id, "Roof", 0).await?;
    test.estimate()
        .insert_legacy_item(&roof, "Shingles", 40, 0, LegacyPricing::visible(150, 90))
        .await?;
    test.estimate()
        .insert_legacy_item(&roof, "Gutters", 12, 1, LegacyPricing::visible(50, 30))
        .await?;

    let first = prepare_database(&test.state.db).await.unwrap();
    let second = prepare_database(&test.state.db).await.unwrap();

    assert_eq!(first.estimates, 1);
    assert!(second.skipped);

    let projection_service = ProjectionService::new(&test.state.db);
    let customer = projection_service.project_by_token("ctok").await.unwrap();
    let master = projection_service.project_by_token("mtok").await.unwrap();

    assert_eq!(customer.estimate_id, estimate.id);
    assert_eq!(customer.total, Decimal::from(200));
    assert_eq!(master.total, Decimal::from(120));

    Ok(())
}
