//! Wait mechanisms for element synchronization.
//!
//! Every element interaction is a suspension point: the caller blocks until
//! the underlying capability resolves or the allotted wait expires. Expiry
//! fails with [`PaginaError::Timeout`] naming the element and action; the
//! completed prefix of an action sequence is never rolled back.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::result::{PaginaError, PaginaResult};

/// Default timeout for wait operations (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create new wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Derive options from durations
    #[must_use]
    pub fn from_durations(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout_ms: timeout.as_millis().min(u128::from(u64::MAX)) as u64,
            poll_interval_ms: poll_interval.as_millis().min(u128::from(u64::MAX)) as u64,
        }
    }
}

/// Poll `probe` until it yields a value or the wait expires.
///
/// The probe is re-run every poll interval; `Ok(None)` means "not ready
/// yet". There is no retry of failed probes — a probe error propagates
/// immediately (silent retries would mask genuine UI regressions).
///
/// # Errors
///
/// Returns [`PaginaError::Timeout`] naming `element` and `action` when the
/// wait expires, or the probe's own error.
pub async fn poll_until<T, F, Fut>(
    element: &str,
    action: &str,
    options: WaitOptions,
    mut probe: F,
) -> PaginaResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = PaginaResult<Option<T>>>,
{
    let deadline = Instant::now() + options.timeout();
    loop {
        if let Some(value) = probe().await? {
            return Ok(value);
        }
        if Instant::now() >= deadline {
            return Err(PaginaError::Timeout {
                element: element.to_string(),
                action: action.to_string(),
                ms: options.timeout_ms,
            });
        }
        tokio::time::sleep(options.poll_interval()).await;
    }
}
