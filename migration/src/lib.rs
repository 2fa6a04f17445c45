pub use sea_orm_migration::prelude::*;

mod m20251101_000001_estimate;
mod m20251101_000002_estimate_section;
mod m20251101_000003_estimate_item;
mod m20251101_000004_estimate_material;
mod m20251101_000005_estimate_view;
mod m20251101_000006_view_setting;
mod m20251101_000007_estimate_version;
mod m20251101_000008_version_snapshot;
mod m20251101_000009_saved_act;
mod m20251101_000010_act_image;
mod m20251101_000011_estimate_sheet_sync;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_estimate::Migration),
            Box::new(m20251101_000002_estimate_section::Migration),
            Box::new(m20251101_000003_estimate_item::Migration),
            Box::new(m20251101_000004_estimate_material::Migration),
            Box::new(m20251101_000005_estimate_view::Migration),
            Box::new(m20251101_000006_view_setting::Migration),
            Box::new(m20251101_000007_estimate_version::Migration),
            Box::new(m20251101_000008_version_snapshot::Migration),
            Box::new(m20251101_000009_saved_act::Migration),
            Box::new(m20251101_000010_act_image::Migration),
            Box::new(m20251101_000011_estimate_sheet_sync::Migration),
        ]
    }
}
