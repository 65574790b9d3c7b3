//! Request counters for the item store service.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for the traffic served against the item store.
///
/// All counters are monotonic and process-local; the server reports them
/// once at shutdown. There is no export surface.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    items_created: AtomicU64,
    list_requests: AtomicU64,
    lookup_hits: AtomicU64,
    lookup_misses: AtomicU64,
}

impl RequestMetrics {
    /// Creates a zeroed set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a created item.
    pub fn record_created(&self) {
        self.items_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a served list request.
    pub fn record_list(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a positional lookup that found an item.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a positional lookup that missed.
    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of items created.
    #[must_use]
    pub fn items_created(&self) -> u64 {
        self.items_created.load(Ordering::Relaxed)
    }

    /// Returns the number of list requests served.
    #[must_use]
    pub fn list_requests(&self) -> u64 {
        self.list_requests.load(Ordering::Relaxed)
    }

    /// Returns the number of successful lookups.
    #[must_use]
    pub fn lookup_hits(&self) -> u64 {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Returns the number of failed lookups.
    #[must_use]
    pub fn lookup_misses(&self) -> u64 {
        self.lookup_misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = RequestMetrics::new();
        assert_eq!(metrics.items_created(), 0);
        assert_eq!(metrics.list_requests(), 0);
        assert_eq!(metrics.lookup_hits(), 0);
        assert_eq!(metrics.lookup_misses(), 0);
    }

    #[test]
    fn test_counters_accumulate() {
        let metrics = RequestMetrics::new();

        metrics.record_created();
        metrics.record_created();
        metrics.record_list();
        metrics.record_lookup_hit();
        metrics.record_lookup_miss();
        metrics.record_lookup_miss();

        assert_eq!(metrics.items_created(), 2);
        assert_eq!(metrics.list_requests(), 1);
        assert_eq!(metrics.lookup_hits(), 1);
        assert_eq!(metrics.lookup_misses(), 2);
    }
}
