//! Utility functions shared by the services.
//!
//! Money rounding, share token generation and the small input checks every editing
//! operation runs before touching the database.

pub mod money;
pub mod token;
pub mod validate;
