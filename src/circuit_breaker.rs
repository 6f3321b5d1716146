use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Three-state circuit breaker guarding an external call path.
///
/// Closed while healthy; opens after `failure_threshold` consecutive
/// failures; a probe is allowed again once `cooldown` has elapsed.
pub struct CircuitBreaker {
    inner: Mutex<BreakerState>,
    cooldown: Duration,
    failure_threshold: u32,
}

#[derive(Default)]
struct BreakerState {
    consecutive_failures: u32,
    opened_at: Option<Instant>,
}

impl CircuitBreaker {
    pub fn new(cooldown_secs: u64, failure_threshold: u32) -> Self {
        CircuitBreaker {
            inner: Mutex::new(BreakerState::default()),
            cooldown: Duration::from_secs(cooldown_secs),
            failure_threshold,
        }
    }

    /// Check if the circuit is open (callers should skip the call).
    /// Transitions to half-open once the cooldown has passed.
    pub fn is_open(&self) -> bool {
        let mut state = self.inner.lock();
        match state.opened_at {
            Some(at) if at.elapsed() >= self.cooldown => {
                state.opened_at = None;
                state.consecutive_failures = 0;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Record a successful call
    pub fn record_success(&self) {
        let mut state = self.inner.lock();
        state.consecutive_failures = 0;
        state.opened_at = None;
    }

    /// Record a failed call
    pub fn record_failure(&self) {
        let mut state = self.inner.lock();
        state.consecutive_failures += 1;
        if state.consecutive_failures >= self.failure_threshold {
            state.opened_at = Some(Instant::now());
        }
    }

    /// Get current consecutive-failure count
    pub fn failure_count(&self) -> u32 {
        self.inner.lock().consecutive_failures
    }
}

/// Exponential backoff calculator
pub struct ExponentialBackoff {
    initial_delay_ms: u64,
    max_delay_ms: u64,
    multiplier: f64,
}

impl ExponentialBackoff {
    pub fn new(initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        ExponentialBackoff {
            initial_delay_ms,
            max_delay_ms,
            multiplier: 2.0,
        }
    }

    /// Calculate delay for attempt number (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        let delay = (self.initial_delay_ms as f64 * self.multiplier.powi(attempt as i32)) as u64;
        delay.min(self.max_delay_ms)
    }

    /// Base delay plus up to 25% random jitter.
    pub fn jittered_delay_for_attempt(&self, attempt: u32) -> u64 {
        use rand::Rng;
        let base = self.delay_for_attempt(attempt);
        base + rand::thread_rng().gen_range(0..=base / 4)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(100, 5000) // 100ms initial, 5s max
    }
}
