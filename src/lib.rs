//! Construction cost estimates with per-audience views, immutable versions and saved acts.
//!
//! The crate is organised the same way from the bottom up:
//! - [`data`] repositories wrap a single table each and accept either a connection or a
//!   transaction
//! - [`service`] implements the view projection, version snapshot & legacy migration logic on
//!   top of the repositories, owning every transaction boundary
//! - [`startup`] connects to the database, applies the schema and runs the legacy migration
//!   before any service is reachable

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
