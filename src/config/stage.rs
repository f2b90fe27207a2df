//! Stage configuration - root configuration structure.

use serde::Deserialize;

use super::endstop::EndstopConfig;
use super::pins::PinMap;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StageConfig {
    /// Pin assignments.
    pub pins: PinMap,

    /// Home switch wiring.
    #[serde(default)]
    pub endstop: EndstopConfig,

    /// Motion defaults.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Homing routine parameters.
    #[serde(default)]
    pub homing: HomingConfig,

    /// Named stage positions.
    #[serde(default)]
    pub positions: StagePositions,

    /// Behaviour of `set_position`.
    #[serde(default)]
    pub set_position: SetPositionMode,
}

impl StageConfig {
    /// Zika-box board: analog-threshold home switch.
    pub fn zika_box() -> Self {
        Self {
            pins: PinMap::ZIKA_BOX,
            endstop: EndstopConfig::analog(),
            ..Self::default()
        }
    }

    /// MR-box peripheral board: pulled-up digital home switch.
    pub fn mr_box() -> Self {
        Self {
            pins: PinMap::MR_BOX,
            endstop: EndstopConfig::digital_pull_up(),
            ..Self::default()
        }
    }
}

/// Motion defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MotionConfig {
    /// RPM restored by `reset` and used by `move_to`. Defaults to 50; a
    /// board config that sets it changes what `reset` restores.
    #[serde(default = "default_rpm")]
    pub default_rpm: u32,
}

fn default_rpm() -> u32 {
    50
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default_rpm: default_rpm(),
        }
    }
}

/// Homing routine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HomingConfig {
    /// Give up after this many whole seconds.
    #[serde(default = "default_homing_timeout")]
    pub timeout_secs: u32,

    /// Distance of each downward probe move in millimeters.
    #[serde(default = "default_homing_step")]
    pub step_mm: f32,

    /// RPM of each probe move.
    #[serde(default = "default_homing_rpm")]
    pub rpm: u32,

    /// Position assumed on entry so that homing always travels down.
    #[serde(default = "default_homing_start")]
    pub start_position_mm: f32,
}

fn default_homing_timeout() -> u32 {
    10
}

fn default_homing_step() -> f32 {
    1.0
}

fn default_homing_rpm() -> u32 {
    25
}

fn default_homing_start() -> f32 {
    100.0
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_homing_timeout(),
            step_mm: default_homing_step(),
            rpm: default_homing_rpm(),
            start_position_mm: default_homing_start(),
        }
    }
}

/// Named stage positions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct StagePositions {
    /// Raised position.
    #[serde(default)]
    pub up_mm: Option<f32>,

    /// Lowered position.
    #[serde(default)]
    pub down_mm: Option<f32>,
}

/// How `set_position` treats the stored position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPositionMode {
    /// Move to the requested position, then record it.
    #[default]
    MoveThenRecord,
    /// Overwrite the stored position first, then move toward it. The move
    /// has zero length, so no pulses are issued and the stage is
    /// re-referenced in place.
    OverwriteThenMove,
}
