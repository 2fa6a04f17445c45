//! Input shapes for estimate editing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields accepted when creating or updating an estimate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimateDto {
    /// Display title.
    pub title: String,
    /// Spreadsheet the estimate is imported from.
    #[serde(default)]
    pub sheet_url: Option<String>,
    /// Spreadsheet column to field mapping, an empty object when unset.
    #[serde(default = "empty_column_mapping")]
    pub column_mapping: serde_json::Value,
}

fn empty_column_mapping() -> serde_json::Value {
    serde_json::json!({})
}

impl EstimateDto {
    /// Estimate fields with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sheet_url: None,
            column_mapping: empty_column_mapping(),
        }
    }
}

/// Fields accepted when creating or updating a section.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionDto {
    /// Display name.
    pub name: String,
    /// Position among the sections of the estimate.
    pub sort_order: i32,
}

/// Fields accepted when creating or updating an item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemDto {
    /// Line number as printed, e.g. `1.2`.
    pub number: String,
    /// Display name.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Quantity in `unit`.
    pub quantity: Decimal,
    /// Position within the section.
    pub sort_order: i32,
}

/// Fields accepted when creating or updating a material line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDto {
    /// Display name.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Quantity in `unit`.
    pub quantity: Decimal,
    /// Unit price.
    pub price: Decimal,
    /// Line total.
    pub total: Decimal,
    /// Position among the material lines.
    pub sort_order: i32,
}
