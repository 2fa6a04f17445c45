use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (uniqueness races, lock contention, dropped connections)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        // Token & version number allocation race on unique indexes, a fresh attempt picks
        // a new token or re-reads the latest version number.
        if self.is_unique_violation() {
            return ErrorRetryStrategy::Retry;
        }

        // SQLite writers racing for the database lock, the loser rolls back and starts over
        if self.is_lock_contention() {
            return ErrorRetryStrategy::Retry;
        }

        match self {
            Self::DbErr(db_err) | Self::TransactionFailed(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // All other database errors are permanent failures:
                // - Query errors (foreign key violations, syntax errors, etc.)
                // - Type conversion errors
                // - Record not found/inserted/updated
                _ => ErrorRetryStrategy::Fail,
            },

            // Caller errors - retrying won't change the outcome
            Self::NotFound(_) => ErrorRetryStrategy::Fail,
            Self::ValidationFailed(_) => ErrorRetryStrategy::Fail,

            // Already the result of exhausted retries
            Self::Conflict(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug within the engine)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
