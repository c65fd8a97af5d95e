//! Simulated network latency for store operations.
//!
//! # Responsibility
//! - Hold per-operation artificial delays emulating backend round-trips.
//! - Keep the delays configurable so tests can switch them off.
//!
//! # Invariants
//! - Latency carries no semantic contract beyond asynchrony: no jitter,
//!   timeouts, retries or cancellation are modeled.

use std::time::Duration;

/// Per-operation artificial delay table for one store.
///
/// The defaults mirror the round-trip times the UI was tuned against; use
/// [`LatencyProfile::zero`] in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// `get_all`.
    pub list: Duration,
    /// `get_by_id`.
    pub lookup: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    /// Entity-specific filter/reduce queries.
    pub query: Duration,
    /// Mock OCR scan.
    pub scan: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            lookup: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
            query: Duration::from_millis(200),
            scan: Duration::from_millis(2000),
        }
    }
}

impl LatencyProfile {
    /// No artificial delay; operations still yield through the async contract.
    pub const fn zero() -> Self {
        Self {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            query: Duration::ZERO,
            scan: Duration::ZERO,
        }
    }
}

/// Sleeps for the configured delay, skipping the timer when disabled.
pub(crate) async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
