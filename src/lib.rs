//! # zstage
//!
//! Driver for a stepper-driven linear Z-stage with a single home switch.
//!
//! ## Features
//!
//! - **Pin-addressed I/O**: the driver talks to an injected [`IoPort`], so one
//!   controller serves every board revision
//! - **embedded-hal 1.0**: `PinState` levels, `DelayNs` for pulse timing
//! - **no_std compatible**: Core library works without standard library
//! - **Position tracking**: Logical position in millimeters, clamped at the origin
//! - **Bounded homing**: Probes toward the home switch with a wall-clock deadline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zstage::{StageConfig, SystemClock, ZStage};
//!
//! let mut stage = ZStage::builder()
//!     .config(StageConfig::mr_box())
//!     .port(port)
//!     .delay(delay)
//!     .clock(SystemClock::new())
//!     .build()?;
//!
//! stage.home()?;
//! stage.move_to(12.5)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`SystemClock`]
//! - `defmt`: Routes internal logging to defmt instead of the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible in every module
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod port;
pub mod stage;

// Re-exports for ergonomic API
pub use config::{validate_config, EndstopConfig, EndstopKind, PinMap, SetPositionMode, StageConfig};
pub use error::{Error, Result};
pub use motion::{Direction, PulseTiming};
pub use port::{Clock, IoPort, PinId, PinMode};
pub use stage::{HomingOutcome, StageState, StageUpdate, ZStage, ZStageBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use port::SystemClock;
