//! Retry logic with exponential backoff for service operations.
//!
//! Writes that allocate a unique value (a view share token, the next version number) can race
//! with a concurrent writer. The losing transaction fails on the unique index or cannot take the
//! SQLite write lock, and is rolled back. [`RetryContext`] then runs the whole
//! operation again so the value is re-allocated.

use std::{future::Future, pin::Pin, time::Duration};

use rand::Rng;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 5 (default)
/// - **Backoff strategy**: Exponential starting at 25 milliseconds (25ms, 50ms, 100ms, ...)
///   plus a random jitter of up to the same amount
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
/// - **Exhaustion**: A unique constraint violation or lock contention still failing on the
///   last attempt is returned as [`Error::Conflict`]
///
/// # Example
///
/// ```ignore
/// let mut ctx = RetryContext::new();
/// let db = db.clone();
///
/// ctx.execute_with_retry("create version for estimate ID 42", || {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let txn = db.begin().await.map_err(Error::TransactionFailed)?;
///         // allocate & insert within the transaction
///         txn.commit().await.map_err(Error::TransactionFailed)?;
///
///         Ok(version)
///     })
/// }).await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in milliseconds (doubles with each retry)
    initial_backoff_ms: u64,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    const DEFAULT_INITIAL_BACKOFF_MS: u64 = 25;

    /// Creates a new retry context with 5 max attempts and 25 millisecond initial backoff.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: Self::DEFAULT_INITIAL_BACKOFF_MS,
        }
    }

    /// Overrides the maximum number of attempts, at least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "create view for estimate ID 1")
    /// - `operation` - Async function returning `Result<R, Error>`, called once per attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error::Conflict)` - A unique constraint or the SQLite write lock kept failing on
    ///   every attempt
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );

                            if e.is_unique_violation() || e.is_lock_contention() {
                                return Err(Error::Conflict(format!("{}: {}", description, e)));
                            }

                            return Err(e);
                        }

                        let backoff_ms = self.initial_backoff_ms * 2_u64.pow(attempt_count - 1);
                        let jitter_ms = rand::rng().random_range(0..=backoff_ms);
                        let backoff = Duration::from_millis(backoff_ms + jitter_ms);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
