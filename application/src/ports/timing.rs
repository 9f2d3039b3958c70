//! Timing ports
//!
//! Simulated latency is split in two: a [`DelayPolicy`] decides how long to
//! wait, and a [`Timer`] performs the wait. Tests swap the timer for one
//! they release by hand, so no test depends on wall-clock time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Awaitable delay
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Chooses the simulated latency for the next reply
pub trait DelayPolicy: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Source of message timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
