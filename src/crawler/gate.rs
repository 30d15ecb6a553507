//! Fetch gate for global request pacing
//!
//! Every outbound request passes through one shared [`FetchGate`]. The gate
//! bounds how many requests are in flight and guarantees a minimum interval
//! between consecutive request starts across all callers.

use crate::config::FetchConfig;
use crate::ScoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;

/// Shared limiter for outbound requests
///
/// The gate never fails a request; it only delays it until both a
/// concurrency slot is free and the spacing interval has elapsed.
#[derive(Debug)]
pub struct FetchGate {
    /// Concurrency slots
    semaphore: Arc<Semaphore>,

    /// Configured number of slots
    max_concurrent: usize,

    /// Minimum time between two request starts
    min_interval: Duration,

    /// Start time of the most recent request; locked for the whole spacing
    /// check so acquirers are admitted one at a time
    last_request: Mutex<Option<Instant>>,
}

/// A held concurrency slot
///
/// The slot is released when the permit is dropped, on every exit path.
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
    started_at: Instant,
}

impl GatePermit {
    /// Instant at which the gate admitted this request
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Releases the slot immediately
    pub fn release(self) {}
}

impl FetchGate {
    /// Creates a new gate
    ///
    /// # Arguments
    ///
    /// * `requests_per_second` - Request starts allowed per second (must be > 0)
    /// * `max_concurrent` - Requests allowed in flight at once (at least 1)
    pub fn new(requests_per_second: f64, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        let min_interval = if requests_per_second.is_finite() && requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::ZERO
        };

        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Creates a gate from the fetch configuration
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.requests_per_second, config.max_concurrent)
    }

    /// Waits for a concurrency slot and for the spacing interval
    ///
    /// # Returns
    ///
    /// * `Ok(GatePermit)` - The request may start now
    /// * `Err(ScoutError::GateClosed)` - The semaphore was closed
    pub async fn acquire(&self) -> Result<GatePermit, ScoutError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ScoutError::GateClosed)?;

        let mut last_request = self.last_request.lock().await;
        if let Some(previous) = *last_request {
            let next_allowed = previous + self.min_interval;
            if next_allowed > Instant::now() {
                tracing::trace!(
                    "Fetch gate spacing: waiting {:?}",
                    next_allowed - Instant::now()
                );
                tokio::time::sleep_until(next_allowed).await;
            }
        }

        let started_at = Instant::now();
        *last_request = Some(started_at);

        Ok(GatePermit {
            _permit: permit,
            started_at,
        })
    }

    /// Number of currently free concurrency slots
    pub fn available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for FetchGate {
    fn default() -> Self {
        Self::new(10.0, 20)
    }
}
