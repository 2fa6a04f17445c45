use serde::Serialize;

/// Outcome of the startup conversion of legacy customer/master sharing into views.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LegacyMigrationReport {
    /// `true` when there was nothing to convert (no estimates, or views already exist).
    pub skipped: bool,
    /// Estimates converted.
    pub estimates: usize,
    /// Views created.
    pub views: usize,
    /// Section setting rows written.
    pub section_settings: u64,
    /// Item setting rows written.
    pub item_settings: u64,
}
