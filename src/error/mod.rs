//! Error types for the estimate engine.
//!
//! Every service returns [`Error`]. The variants map onto the failure kinds a caller
//! renders: missing or mismatched records, uniqueness conflicts that survived the retry loop,
//! rejected input and aborted transactions. Storage errors that don't fit those buckets are
//! carried as-is in [`Error::DbErr`].

pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the estimate engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A record does not exist, or exists but does not belong to the referenced parent.
    #[error("{0} not found")]
    NotFound(String),
    /// A uniqueness constraint (view token, version number) kept failing after retries.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Caller supplied input failed basic checks.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    /// A transaction failed to begin or commit, none of its writes were applied.
    #[error("Transaction failed and was rolled back: {0}")]
    TransactionFailed(sea_orm::DbErr),
    /// Internal error indicating a bug, such as a snapshot row referencing a record outside
    /// of the estimate being copied.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Returns `true` when the underlying storage error is a unique constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::DbErr(err) | Self::TransactionFailed(err) => matches!(
                err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }

    /// Returns `true` when SQLite refused a statement because another connection holds a
    /// conflicting lock.
    ///
    /// A deferred transaction upgrading to a write lock while another writer is active fails
    /// immediately with `SQLITE_BUSY` instead of waiting, running the transaction again
    /// resolves it.
    pub fn is_lock_contention(&self) -> bool {
        match self {
            Self::DbErr(err) | Self::TransactionFailed(err) => is_sqlite_lock_error(err),
            _ => false,
        }
    }
}

/// `SQLITE_BUSY` & `SQLITE_LOCKED` with their extended result codes
const SQLITE_LOCK_CODES: [&str; 7] = ["5", "6", "261", "262", "517", "518", "773"];

fn is_sqlite_lock_error(err: &sea_orm::DbErr) -> bool {
    let runtime_err = match err {
        sea_orm::DbErr::Conn(e) | sea_orm::DbErr::Exec(e) | sea_orm::DbErr::Query(e) => e,
        _ => return false,
    };

    let sea_orm::RuntimeErr::SqlxError(sqlx_err) = runtime_err else {
        return false;
    };

    sqlx_err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| SQLITE_LOCK_CODES.contains(&code.as_ref()))
}
