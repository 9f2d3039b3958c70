//! Timing adapters: the tokio timer, delay policies, and the system clock.

mod clock;
mod delay;
mod timer;

pub use clock::SystemClock;
pub use delay::{FixedDelay, UniformDelay};
pub use timer::TokioTimer;
