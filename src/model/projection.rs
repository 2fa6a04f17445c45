//! Audience-specific rendering of an estimate.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// An estimate as seen through one view: hidden sections and items removed, prices taken
/// from the view's settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedEstimate {
    /// Projected estimate.
    pub estimate_id: Uuid,
    /// Estimate title.
    pub title: String,
    /// View the estimate is seen through.
    pub view_id: Uuid,
    /// Name of that view.
    pub view_name: String,
    /// Visible sections in display order.
    pub sections: Vec<ProjectedSection>,
    /// Sum of every visible item total, rounded to 2 decimal places.
    pub total: Decimal,
}

/// A visible section with its visible items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedSection {
    /// Section ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Position among the sections of the estimate.
    pub sort_order: i32,
    /// Visible items in display order.
    pub items: Vec<ProjectedItem>,
    /// Sum of the visible item totals, rounded to 2 decimal places.
    pub total: Decimal,
}

/// A visible item priced by the view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectedItem {
    /// Item ID.
    pub id: Uuid,
    /// Line number as printed.
    pub number: String,
    /// Display name.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Quantity in `unit`.
    pub quantity: Decimal,
    /// Position within the section.
    pub sort_order: i32,
    /// Unit price from the view.
    pub price: Decimal,
    /// Line total from the view, unrounded.
    pub total: Decimal,
}
