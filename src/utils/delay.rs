use crate::domain::ports::DelaySource;
use rand::Rng;
use std::time::Duration;

/// Samples a fresh pause from the closed interval [0, max_ms] milliseconds
/// on every call. This is the production delay the optimization server sees:
/// enough jitter to exercise its timeout and cancellation handling.
#[derive(Debug, Clone)]
pub struct UniformJitter {
    max_ms: u64,
}

impl UniformJitter {
    pub const DEFAULT_MAX_MS: u64 = 2000;

    pub fn new(max_ms: u64) -> Self {
        Self { max_ms }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_MS)
    }
}

impl DelaySource for UniformJitter {
    fn next_delay(&mut self) -> Duration {
        let ms = rand::thread_rng().gen_range(0..=self.max_ms);
        Duration::from_millis(ms)
    }
}

/// Constant delay, for tests that must not sleep.
#[derive(Debug, Clone)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }
}

impl DelaySource for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}
