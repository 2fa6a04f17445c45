//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// An estimate, the root of every other record.
///
/// # Fields (from `entity::estimate::Model`)
/// - `id` - Primary key
/// - `owner_id` - Account that owns the estimate
/// - `title` - Display title
/// - `customer_token` / `master_token` / `master_password` - Legacy two-audience sharing,
///   read only by the startup migration
/// - `sheet_url` / `column_mapping` / `last_synced_at` - Spreadsheet import metadata
/// - `created_at` - Creation timestamp
pub type EstimateModel = entity::estimate::Model;

/// A named, ordered group of items within an estimate.
pub type SectionModel = entity::estimate_section::Model;

/// A line item. The legacy `customer_*` and `master_*` price columns are only read by the
/// startup migration, current prices live in [`ViewItemSettingModel`].
pub type ItemModel = entity::estimate_item::Model;

/// A material line attached to an estimate.
pub type MaterialModel = entity::estimate_material::Model;

/// A named audience presentation of an estimate, reachable through its share token.
pub type ViewModel = entity::estimate_view::Model;

/// Section visibility for one view.
pub type ViewSectionSettingModel = entity::view_section_setting::Model;

/// Item price, total & visibility for one view.
pub type ViewItemSettingModel = entity::view_item_setting::Model;

/// Header of an immutable estimate snapshot.
pub type VersionModel = entity::estimate_version::Model;

/// A section copied into a version.
pub type VersionSectionModel = entity::version_section::Model;

/// An item copied into a version.
pub type VersionItemModel = entity::version_item::Model;

/// A view copied into a version, with the token it had at the time.
pub type VersionViewModel = entity::version_view::Model;

/// Section visibility of a copied view.
pub type VersionViewSectionSettingModel = entity::version_view_section_setting::Model;

/// Item price, total & visibility of a copied view.
pub type VersionViewItemSettingModel = entity::version_view_item_setting::Model;

/// A saved completion certificate header.
pub type SavedActModel = entity::saved_act::Model;

/// A frozen line of a saved act.
pub type SavedActItemModel = entity::saved_act_item::Model;

/// An image (logo, stamp or signature) printed on acts for an estimate.
pub type ActImageModel = entity::act_image::Model;
