//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main smeta crate so tests read the same on both sides.

pub type EstimateModel = entity::estimate::Model;

pub type SectionModel = entity::estimate_section::Model;

pub type ItemModel = entity::estimate_item::Model;

pub type MaterialModel = entity::estimate_material::Model;

pub type ViewModel = entity::estimate_view::Model;

pub type ViewSectionSettingModel = entity::view_section_setting::Model;

pub type ViewItemSettingModel = entity::view_item_setting::Model;
