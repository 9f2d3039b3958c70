//! Reply latency policies

use rand::Rng;
use std::time::Duration;
use wellness_application::DelayPolicy;

/// Uniformly random delay in `[min, max)`, drawn at millisecond resolution.
///
/// A collapsed or inverted range always yields `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for UniformDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(3000))
    }
}

impl DelayPolicy for UniformDelay {
    fn next_delay(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        if max <= min {
            return self.min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..max))
    }
}

/// Always the same delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedDelay(pub Duration);

impl DelayPolicy for FixedDelay {
    fn next_delay(&self) -> Duration {
        self.0
    }
}
