//! Placeholder values shared by fixtures and tests.

/// Owner assigned to every estimate inserted by fixtures.
pub static TEST_OWNER_ID: uuid::Uuid = uuid::Uuid::from_u128(0x5e7a_0000_0000_0000_0000_0000_0000_0001);

/// Title used by [`crate::fixtures::estimate::EstimateFixtures::insert_estimate`] callers
/// that don't care about the value.
pub static TEST_ESTIMATE_TITLE: &str = "Apartment renovation";

/// Unit of measure for fixture items.
pub static TEST_ITEM_UNIT: &str = "m2";
