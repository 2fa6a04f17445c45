use chrono::NaiveDate;
use rust_decimal::Decimal;
use smeta_test_utils::prelude::*;

use crate::{
    error::Error,
    model::act::{ActImageType, ActSelection, SaveActRequest},
    service::{act::ActService, projection::ProjectionService, view::ViewService},
};

fn act_request(estimate_id: uuid::Uuid, selection: ActSelection) -> SaveActRequest {
    SaveActRequest {
        estimate_id,
        view_id: None,
        number: "17".to_string(),
        act_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        selection,
        executor_name: Some("Builder LLC".to_string()),
        customer_name: Some("  ".to_string()),
        director_name: None,
    }
}

/// Expect a section selection to produce one line per section carrying its total
#[tokio::test]
async fn saves_section_selection() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, _, view) = test.estimate().insert_priced_estimate().await?;

    let act_service = ActService::new(&test.state.db);
    let saved = act_service
        .save_act(act_request(estimate.id, ActSelection::Sections(vec![section.id])))
        .await
        .unwrap();

    assert_eq!(saved.act.view_id, Some(view.id));
    assert_eq!(saved.act.selection_mode, "sections");
    assert_eq!(saved.act.grand_total, Decimal::from(200));
    assert_eq!(saved.act.customer_name, None);
    assert_eq!(saved.items.len(), 1);
    assert_eq!(saved.items[0].section_id, Some(section.id));
    assert_eq!(saved.items[0].item_id, None);
    assert_eq!(saved.items[0].total, Decimal::from(200));

    Ok(())
}

/// Expect an item selection to keep the selection order and freeze prices
#[tokio::test]
async fn saves_item_selection() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, items, view) = test.estimate().insert_priced_estimate().await?;

    let act_service = ActService::new(&test.state.db);
    let saved = act_service
        .save_act(SaveActRequest {
            view_id: Some(view.id),
            ..act_request(
                estimate.id,
                ActSelection::Items(vec![items[1].id, items[0].id]),
            )
        })
        .await
        .unwrap();

    ViewService::new(&test.state.db)
        .set_item_override(view.id, items[0].id, Decimal::ONE, Decimal::from(1), true)
        .await
        .unwrap();

    let reloaded = act_service.get_act(saved.act.id).await.unwrap();

    assert_eq!(reloaded, saved);
    assert_eq!(reloaded.items[0].name, "Paint");
    assert_eq!(reloaded.items[1].name, "Plaster");
    assert_eq!(reloaded.items[1].total, Decimal::from(100));
    assert_eq!(reloaded.act.grand_total, Decimal::from(200));

    Ok(())
}

/// Expect ValidationFailed when a selected item is hidden in the view
#[tokio::test]
async fn rejects_hidden_selection() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, _, _) = test.estimate().insert_priced_estimate().await?;
    let hidden = test.estimate().insert_item(&section, "Primer", 3, 2).await?;

    let act_service = ActService::new(&test.state.db);
    let result = act_service
        .save_act(act_request(estimate.id, ActSelection::Items(vec![hidden.id])))
        .await;

    assert!(matches!(result, Err(Error::ValidationFailed(_))));
    assert!(act_service.get_acts(estimate.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect ValidationFailed for an empty selection or a blank number
#[tokio::test]
async fn rejects_invalid_request() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, _, _) = test.estimate().insert_priced_estimate().await?;

    let act_service = ActService::new(&test.state.db);
    let empty = act_service
        .save_act(act_request(estimate.id, ActSelection::Sections(Vec::new())))
        .await;
    let blank_number = act_service
        .save_act(SaveActRequest {
            number: " ".to_string(),
            ..act_request(estimate.id, ActSelection::Sections(vec![section.id]))
        })
        .await;

    assert!(matches!(empty, Err(Error::ValidationFailed(_))));
    assert!(matches!(blank_number, Err(Error::ValidationFailed(_))));

    Ok(())
}

/// Expect NotFound when the estimate has no views
#[tokio::test]
async fn fails_without_views() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Bare").await?;
    let section = test.estimate().insert_section(estimate.id, "Walls", 0).await?;

    let act_service = ActService::new(&test.state.db);
    let result = act_service
        .save_act(act_request(estimate.id, ActSelection::Sections(vec![section.id])))
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect deleting an act to remove it and its lines
#[tokio::test]
async fn deletes_act() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, _, _) = test.estimate().insert_priced_estimate().await?;

    let act_service = ActService::new(&test.state.db);
    let saved = act_service
        .save_act(act_request(estimate.id, ActSelection::Sections(vec![section.id])))
        .await
        .unwrap();

    assert!(act_service.delete_act(saved.act.id).await.is_ok());
    assert!(matches!(
        act_service.get_act(saved.act.id).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        act_service.delete_act(saved.act.id).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

/// Expect images to round-trip as raw bytes, one per type
#[tokio::test]
async fn stores_images() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Stamped").await?;
    let stamp = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff];

    let act_service = ActService::new(&test.state.db);
    act_service
        .set_image(estimate.id, ActImageType::Stamp, &stamp)
        .await
        .unwrap();

    assert_eq!(
        act_service
            .get_image(estimate.id, ActImageType::Stamp)
            .await
            .unwrap(),
        Some(stamp)
    );
    assert_eq!(
        act_service
            .get_image(estimate.id, ActImageType::Signature)
            .await
            .unwrap(),
        None
    );
    assert!(matches!(
        act_service
            .set_image(estimate.id, ActImageType::Signature, &[])
            .await,
        Err(Error::ValidationFailed(_))
    ));
    assert!(act_service
        .delete_image(estimate.id, ActImageType::Stamp)
        .await
        .is_ok());
    assert!(matches!(
        act_service
            .delete_image(estimate.id, ActImageType::Stamp)
            .await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

/// Expect the grand total of a section selection to round the item totals once, matching the
/// projection total rather than the sum of rounded section lines
#[tokio::test]
async fn rounds_section_grand_total_once() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Fractions").await?;
    let view = test
        .estimate()
        .insert_view(estimate.id, "Customer", "fractions-token", 0)
        .await?;
    let walls = test.estimate().insert_section(estimate.id, "Walls", 0).await?;
    let floor = test.estimate().insert_section(estimate.id, "Floor", 1).await?;
    let plaster = test.estimate().insert_item(&walls, "Plaster", 1, 0).await?;
    let screed = test.estimate().insert_item(&floor, "Screed", 1, 0).await?;

    let half_cent = Decimal::new(5, 3);
    let view_service = ViewService::new(&test.state.db);
    for item_id in [plaster.id, screed.id] {
        view_service
            .set_item_override(view.id, item_id, half_cent, half_cent, true)
            .await
            .unwrap();
    }

    let saved = ActService::new(&test.state.db)
        .save_act(act_request(
            estimate.id,
            ActSelection::Sections(vec![walls.id, floor.id]),
        ))
        .await
        .unwrap();
    let projected = ProjectionService::new(&test.state.db)
        .project_estimate(estimate.id, view.id)
        .await
        .unwrap();

    assert_eq!(saved.items.len(), 2);
    assert_eq!(saved.items[0].total, Decimal::new(1, 2));
    assert_eq!(saved.items[1].total, Decimal::new(1, 2));
    assert_eq!(saved.act.grand_total, Decimal::new(1, 2));
    assert_eq!(saved.act.grand_total, projected.total);

    Ok(())
}

/// Expect ValidationFailed when the selection names the same row twice
#[tokio::test]
async fn rejects_repeated_selection() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, section, items, _) = test.estimate().insert_priced_estimate().await?;

    let act_service = ActService::new(&test.state.db);
    let repeated_section = act_service
        .save_act(act_request(
            estimate.id,
            ActSelection::Sections(vec![section.id, section.id]),
        ))
        .await;
    let repeated_item = act_service
        .save_act(act_request(
            estimate.id,
            ActSelection::Items(vec![items[0].id, items[1].id, items[0].id]),
        ))
        .await;

    assert!(matches!(repeated_section, Err(Error::ValidationFailed(_))));
    assert!(matches!(repeated_item, Err(Error::ValidationFailed(_))));
    assert!(act_service.get_acts(estimate.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect a logo to be stored alongside the stamp without replacing it
#[tokio::test]
async fn stores_logo() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let estimate = test.estimate().insert_estimate("Branded").await?;
    let logo = vec![0x47, 0x49, 0x46, 0x38, 0x39, 0x61];
    let stamp = vec![0x89, 0x50, 0x4e, 0x47];

    let act_service = ActService::new(&test.state.db);
    act_service
        .set_image(estimate.id, ActImageType::Logo, &logo)
        .await
        .unwrap();
    act_service
        .set_image(estimate.id, ActImageType::Stamp, &stamp)
        .await
        .unwrap();

    assert_eq!(
        act_service
            .get_image(estimate.id, ActImageType::Logo)
            .await
            .unwrap(),
        Some(logo)
    );
    assert_eq!(
        act_service
            .get_image(estimate.id, ActImageType::Stamp)
            .await
            .unwrap(),
        Some(stamp)
    );

    Ok(())
}

/// Expect NotFound from act and image operations on an unknown estimate
#[tokio::test]
async fn fails_for_unknown_estimate() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let unknown_id = uuid::Uuid::new_v4();

    let act_service = ActService::new(&test.state.db);

    assert!(matches!(
        act_service.get_acts(unknown_id).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        act_service
            .set_image(unknown_id, ActImageType::Logo, &[0x01])
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        act_service
            .get_image(unknown_id, ActImageType::Logo)
            .await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}
