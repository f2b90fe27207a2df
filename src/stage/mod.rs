//! Stage module for zstage.
//!
//! Provides the Z-stage controller with position bookkeeping, endstop sensing and homing.

mod builder;
mod driver;
mod endstop;
mod homing;
mod position;
mod state;

pub use builder::ZStageBuilder;
pub use driver::ZStage;
pub use endstop::Endstop;
pub use homing::HomingOutcome;
pub use position::PlannedMove;
pub use state::{StageState, StageUpdate};
