use crate::cache::CachedResponse;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Counters for the topic-expansion pipeline.
#[derive(Debug, Default, Clone)]
pub struct ExpanderMetrics {
    pub success_count: u64,
    pub failure_count: u64,
    pub fallback_count: u64,
    pub total_latency_ms: u64,
}

/// Request-scoped state container.
///
/// The scheduler itself is a pure function and holds nothing; this struct
/// only carries the expander's response cache and metrics. All fields are
/// passed explicitly by the caller, so no mutable state survives outside
/// the owner's lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Response cache (LRU with bounded size)
    pub response_cache: Arc<RwLock<LruCache<u64, CachedResponse>>>,
    /// Expansion pipeline metrics
    pub expander_metrics: Arc<RwLock<ExpanderMetrics>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            response_cache: Arc::new(RwLock::new(LruCache::new(
                NonZeroUsize::new(200).expect("200 > 0"),
            ))),
            expander_metrics: Arc::new(RwLock::new(ExpanderMetrics::default())),
        }
    }

    pub fn get_expander_metrics(&self) -> ExpanderMetrics {
        self.expander_metrics.read().clone()
    }

    /// Record a successful expansion call.
    pub fn record_expansion_success(&self, latency_ms: u64) {
        let mut metrics = self.expander_metrics.write();
        metrics.success_count += 1;
        metrics.total_latency_ms += latency_ms;
    }

    /// Record a failed expansion attempt.
    pub fn record_expansion_failure(&self) {
        let mut metrics = self.expander_metrics.write();
        metrics.failure_count += 1;
    }

    /// Record that the deterministic fallback list was used.
    pub fn record_fallback(&self) {
        let mut metrics = self.expander_metrics.write();
        metrics.fallback_count += 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
