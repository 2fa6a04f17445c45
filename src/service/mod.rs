//! Business logic on top of the repositories.
//!
//! Services own transaction boundaries: every operation that writes more than one row, or
//! reads rows that must be consistent with each other, runs inside a single transaction.
//! Operations allocating unique values run through [`retry::RetryContext`].

pub mod act;
pub mod estimate;
pub mod legacy;
pub mod projection;
pub mod retry;
pub mod version;
pub mod view;

#[cfg(test)]
mod tests;
