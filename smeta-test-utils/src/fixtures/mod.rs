//! Test fixture modules for database record creation.
//!
//! - `estimate` - estimates, their sections, items and materials, views with their
//!   visibility & price settings, plus in-memory model factories

pub mod estimate;
