//! Configuration module for zstage.
//!
//! Provides the pin assignment table, endstop wiring and motion/homing settings,
//! loaded from TOML files (with `std` feature) or built from board presets.

mod endstop;
#[cfg(feature = "std")]
mod loader;
mod pins;
mod stage;
mod validation;

pub use endstop::{EndstopConfig, EndstopKind};
pub use pins::PinMap;
pub use stage::{HomingConfig, MotionConfig, SetPositionMode, StageConfig, StagePositions};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
