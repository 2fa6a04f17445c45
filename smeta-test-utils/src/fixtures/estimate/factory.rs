//! Factory functions for generating in-memory estimate models.
//!
//! These don't touch the database, they exist for unit tests of pure functions such as
//! the view projection.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    constant::TEST_ITEM_UNIT,
    model::{ItemModel, SectionModel, ViewItemSettingModel},
};

/// Create a mock section model belonging to `estimate_id`.
pub fn mock_section_model(estimate_id: Uuid, name: &str, sort_order: i32) -> SectionModel {
    SectionModel {
        id: Uuid::new_v4(),
        estimate_id,
        name: name.to_string(),
        sort_order,
        show_customer: true,
        show_master: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock item model inside `section` without legacy pricing.
pub fn mock_item_model(section: &SectionModel, name: &str, sort_order: i32) -> ItemModel {
    ItemModel {
        id: Uuid::new_v4(),
        section_id: section.id,
        estimate_id: section.estimate_id,
        number: format!("{}", sort_order + 1),
        name: name.to_string(),
        unit: TEST_ITEM_UNIT.to_string(),
        quantity: Decimal::ONE,
        sort_order,
        customer_price: None,
        customer_total: None,
        show_customer: true,
        master_price: None,
        master_total: None,
        show_master: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock per-view item setting.
pub fn mock_item_setting_model(
    view_id: Uuid,
    item_id: Uuid,
    total: Decimal,
    visible: bool,
) -> ViewItemSettingModel {
    ViewItemSettingModel {
        id: Uuid::new_v4(),
        view_id,
        item_id,
        price: total,
        total,
        visible,
    }
}
