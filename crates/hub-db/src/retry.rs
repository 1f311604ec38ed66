//! Retry logic for transient local write contention.
//!
//! A second process (another `crh` invocation, a sync tool) holding the
//! SQLite write lock surfaces as `SQLITE_BUSY` / "database is locked".
//! Those clear on their own once the other writer commits, so writes are
//! retried with capped exponential backoff. Constraint violations and
//! malformed SQL are never retried.

use std::future::Future;
use std::time::Duration;

use crate::error::DatabaseError;

/// Configuration for retry behavior on transient store errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Default delays with a custom attempt budget (at least one attempt).
    #[must_use]
    pub fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (1-based), doubling up to `max_delay`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Detect transient lock contention from libSQL.
///
/// Narrow on purpose: only busy/locked conditions qualify.
pub fn is_transient_error(e: &libsql::Error) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("database is locked")
        || msg.contains("database table is locked")
        || msg.contains("sqlite_busy")
        || msg.contains("database is busy")
}

/// [`is_transient_error`] lifted to [`DatabaseError`].
pub fn is_transient(e: &DatabaseError) -> bool {
    matches!(e, DatabaseError::LibSql(inner) if is_transient_error(inner))
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// attempt budget runs out. The last error is returned.
///
/// # Errors
///
/// Returns the error from the final attempt.
pub async fn with_retry<T, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, DatabaseError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DatabaseError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < config.max_attempts && is_transient(&e) => {
                let delay = config.delay_for(attempt);
                tracing::debug!(attempt, ?delay, error = %e, "transient store error, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
