use rust_decimal::Decimal;
use smeta::{
    model::estimate::{EstimateDto, ItemDto, SectionDto},
    service::{
        estimate::EstimateService, projection::ProjectionService, version::VersionService,
        view::ViewService,
    },
};
use smeta_test_utils::{constant::TEST_OWNER_ID, prelude::*};

fn item(name: &str, sort_order: i32) -> ItemDto {
    ItemDto {
        number: format!("1.{}", sort_order + 1),
        name: name.to_string(),
        unit: "m2".to_string(),
        quantity: Decimal::from(10),
        sort_order,
    }
}

/// Expect customer & master views of one estimate to price it independently, and hiding a
/// section in one view to leave the other untouched
#[tokio::test]
async fn customer_and_master_views() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let db = &test.state.db;

    let estimate_service = EstimateService::new(db);
    let view_service = ViewService::new(db);
    let projection_service = ProjectionService::new(db);

    let estimate = estimate_service
        .create_estimate(TEST_OWNER_ID, EstimateDto::new("Apartment renovation"))
        .await
        .unwrap();
    let walls = estimate_service
        .add_section(
            estimate.id,
            SectionDto {
                name: "Walls".to_string(),
                sort_order: 0,
            },
        )
        .await
        .unwrap();
    let plaster = estimate_service.add_item(walls.id, item("Plaster", 0)).await.unwrap();
    let paint = estimate_service.add_item(walls.id, item("Paint", 1)).await.unwrap();

    let customer = view_service
        .create_view(estimate.id, "Customer", None)
        .await
        .unwrap();
    let master = view_service
        .create_view(estimate.id, "Master", Some("crew".to_string()))
        .await
        .unwrap();

    for (item_id, customer_total, master_total) in [(plaster.id, 120, 100), (paint.id, 80, 60)] {
        view_service
            .set_item_override(
                customer.id,
                item_id,
                Decimal::from(customer_total) / Decimal::from(10),
                Decimal::from(customer_total),
                true,
            )
            .await
            .unwrap();
        view_service
            .set_item_override(
                master.id,
                item_id,
                Decimal::from(master_total) / Decimal::from(10),
                Decimal::from(master_total),
                true,
            )
            .await
            .unwrap();
    }

    let customer_projection = projection_service
        .project_by_token(&customer.token)
        .await
        .unwrap();
    let master_projection = projection_service
        .project_by_token(&master.token)
        .await
        .unwrap();

    assert_eq!(customer_projection.total, Decimal::from(200));
    assert_eq!(master_projection.total, Decimal::from(160));

    let version = VersionService::new(db)
        .create_version(estimate.id, Some("Before hiding walls".to_string()))
        .await
        .unwrap();

    view_service
        .set_section_visibility(customer.id, walls.id, false)
        .await
        .unwrap();

    let customer_projection = projection_service
        .project_estimate(estimate.id, customer.id)
        .await
        .unwrap();
    let master_projection = projection_service
        .project_estimate(estimate.id, master.id)
        .await
        .unwrap();

    assert!(customer_projection.sections.is_empty());
    assert_eq!(customer_projection.total, Decimal::ZERO);
    assert_eq!(master_projection.sections[0].items.len(), 2);
    assert_eq!(master_projection.total, Decimal::from(160));

    // The version taken before hiding still shows the walls to the customer
    let version_service = VersionService::new(db);
    let snapshot = version_service.read_version(version.id).await.unwrap();
    let customer_snapshot_view = snapshot
        .views
        .iter()
        .find(|view| view.original_view_id == customer.id)
        .unwrap();
    let versioned = version_service
        .project_version(version.id, customer_snapshot_view.id)
        .await
        .unwrap();

    assert_eq!(versioned.total, Decimal::from(200));
    assert_eq!(versioned.sections[0].items.len(), 2);

    Ok(())
}
