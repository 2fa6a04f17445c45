use smeta::{error::Error, service::version::VersionService};
use smeta_test_utils::prelude::*;

const WRITERS: u32 = 8;

/// Expect concurrent version creation to hand out distinct, gap-free numbers
#[tokio::test]
async fn concurrent_version_numbers_are_unique() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;

    let version_service = VersionService::new(&test.state.db);
    let results = futures::future::join_all(
        (0..WRITERS).map(|i| version_service.create_version(estimate.id, Some(format!("Draft {}", i)))),
    )
    .await;

    let mut numbers: Vec<i32> = results
        .into_iter()
        .map(|result| result.unwrap().version_number)
        .collect();
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=WRITERS as i32).collect::<Vec<i32>>());

    Ok(())
}

/// Expect writers racing on separate connections to either get a distinct, gap-free number
/// or fail with Conflict, never with a raw storage error
#[tokio::test]
async fn racing_writers_get_unique_numbers_or_conflict() -> Result<(), TestError> {
    let mut test = TestSetup::with_database_file(WRITERS).await?;
    let (estimate, _, _, _) = test.estimate().insert_priced_estimate().await?;

    let version_service = VersionService::new(&test.state.db);
    let results =
        futures::future::join_all((0..WRITERS).map(|_| version_service.create_version(estimate.id, None)))
            .await;

    let mut numbers = Vec::new();
    for result in results {
        match result {
            Ok(version) => numbers.push(version.version_number),
            Err(Error::Conflict(_)) => {}
            Err(e) => panic!("expected a version or Conflict, got {:?}", e),
        }
    }
    numbers.sort_unstable();

    assert!(!numbers.is_empty());
    assert_eq!(numbers, (1..=numbers.len() as i32).collect::<Vec<i32>>());

    let stored = version_service.get_versions(estimate.id).await.unwrap();
    assert_eq!(stored.len(), numbers.len());

    Ok(())
}
