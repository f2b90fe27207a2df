//! Stage state snapshot and partial updates.

use serde::{Deserialize, Serialize};

/// Logical state of the stage.
///
/// Owned by [`ZStage`](super::ZStage) and mutated only through its methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageState {
    /// Logical position in millimeters, never negative after a move.
    pub position: f32,
    /// Driver powered (the physical enable line is active low).
    pub motor_enabled: bool,
    /// 16× micro-stepping selected.
    pub micro_stepping: bool,
    /// RPM used by `move_to`.
    pub rpm: u32,
    /// Home switch checks enabled.
    pub home_stop_enabled: bool,
    /// Reserved flag for a second limit switch. No sensor consults it.
    pub engaged_stop_enabled: bool,
}

impl StageState {
    /// Power-on state with the given default RPM.
    pub const fn reset(rpm: u32) -> Self {
        Self {
            position: 0.0,
            motor_enabled: false,
            micro_stepping: true,
            rpm,
            home_stop_enabled: true,
            engaged_stop_enabled: false,
        }
    }
}

/// Partial state update. `None` fields are left untouched.
///
/// Applied by [`ZStage::apply`](super::ZStage::apply): flags first, then the
/// RPM, then the position (which may move the stage).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct StageUpdate {
    /// Enable or disable the driver.
    #[serde(default)]
    pub motor_enabled: Option<bool>,
    /// Select micro-stepping.
    #[serde(default)]
    pub micro_stepping: Option<bool>,
    /// Toggle home switch checks.
    #[serde(default)]
    pub home_stop_enabled: Option<bool>,
    /// Toggle the reserved engaged-stop flag.
    #[serde(default)]
    pub engaged_stop_enabled: Option<bool>,
    /// New default RPM.
    #[serde(default)]
    pub rpm: Option<u32>,
    /// New position, applied through `set_position`.
    #[serde(default)]
    pub position: Option<f32>,
}

impl StageUpdate {
    /// Check if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
