//! Database repositories.
//!
//! One repository per table (or per tightly coupled pair of tables). Repositories are generic
//! over [`sea_orm::ConnectionTrait`] so services can run them against the pool or inside a
//! transaction. They return `Ok(None)` for missing rows and leave "not found" decisions to
//! the services.

pub mod act_image;
pub mod estimate;
pub mod item;
pub mod material;
pub mod saved_act;
pub mod section;
pub mod version;
pub mod version_snapshot;
pub mod view;
pub mod view_setting;

/// Rows per multi-row insert, keeps bind parameters below backend limits.
pub(crate) const INSERT_BATCH_SIZE: usize = 100;

#[cfg(test)]
mod tests;
