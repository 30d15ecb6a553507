//! Retry with exponential backoff and jitter
//!
//! The delay before retry `n` (0-based) is `base_delay * 2^n` plus a uniform
//! random jitter in `[0, max_jitter]`, which keeps clients that failed
//! together from retrying together.

use crate::config::FetchConfig;
use rand::Rng;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How often and how patiently an operation is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,

    /// Delay before the first retry, doubled for each further one
    pub base_delay: Duration,

    /// Upper bound of the random jitter added to each delay
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_jitter: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration, max_jitter: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_jitter,
        }
    }

    /// Policy for the listing request
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.max_retries, config.base_delay(), config.max_jitter())
    }

    /// Same policy with a different retry count
    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    /// Exponential part of the delay before retry `attempt` (0-based)
    pub fn exponential_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor)
    }

    /// Full delay before retry `attempt`, jitter included
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.exponential_delay(attempt) + self.jitter()
    }

    fn jitter(&self) -> Duration {
        let max_ms = self.max_jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
    }
}

/// Runs `operation`, retrying failures according to `policy`
///
/// Each failed attempt is logged as a warning; running out of retries is
/// logged as an error and the last failure is returned.
///
/// # Arguments
///
/// * `policy` - Retry count and backoff parameters
/// * `label` - Short description of the operation for log messages
/// * `operation` - Produces a fresh future for every attempt
///
/// # Example
///
/// ```no_run
/// use founder_scout::crawler::{retry_with_backoff, RetryPolicy};
///
/// # async fn example() -> Result<(), String> {
/// let value = retry_with_backoff(&RetryPolicy::default(), "lookup", || async {
///     Ok::<_, String>(42)
/// })
/// .await?;
/// assert_eq!(value, 42);
/// # Ok(())
/// # }
/// ```
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let total_attempts = policy.max_retries + 1;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!(
                    "{} failed (attempt {}/{}): {}",
                    label,
                    attempt + 1,
                    total_attempts,
                    e
                );

                if attempt >= policy.max_retries {
                    tracing::error!("{} failed after {} attempts: {}", label, total_attempts, e);
                    return Err(e);
                }

                let delay = policy.backoff_delay(attempt);
                tracing::debug!("Retrying {} in {:?}", label, delay);
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
