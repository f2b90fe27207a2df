//! Motion module for zstage.
//!
//! Provides pulse timing calculation and step pulse emission.

mod direction;
mod executor;
mod timing;

pub use direction::Direction;
pub use executor::PulseExecutor;
pub use timing::{multiplier, PulseTiming, MICRO_STEP_MULTIPLIER, PULSE_CONSTANT_US, STEPS_PER_MM};
