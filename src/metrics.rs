//! Operation counting for protocol-cost analysis.
//!
//! Each key agreement participant owns an [`OperationCounter`] that is bumped
//! once per exponentiation it performs on behalf of a protocol. The counter
//! is instrumentation only: protocol results never depend on it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe monotonically increasing counter.
///
/// Clones share the same underlying count, so a benchmarking harness can
/// keep a handle while the participant keeps counting.
#[derive(Clone, Debug, Default)]
pub struct OperationCounter {
    count: Arc<AtomicU64>,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one operation.
    #[inline]
    pub fn record(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of operations recorded since the last reset.
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}
