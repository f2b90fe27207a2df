//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::StageConfig;

/// Validate a stage configuration.
///
/// Checks:
/// - No pin is assigned to two roles
/// - RPM values are positive
/// - Homing timeout and step are positive
/// - Analog threshold lies within the ADC range
/// - Configured positions are finite and non-negative
pub fn validate_config(config: &StageConfig) -> Result<()> {
    if let Some(pin) = config.pins.find_duplicate() {
        return Err(Error::Config(ConfigError::DuplicatePin(pin)));
    }

    if !config.endstop.is_valid() {
        return Err(Error::Config(ConfigError::InvalidAnalogThreshold(
            config.endstop.analog_threshold,
        )));
    }

    if config.motion.default_rpm == 0 {
        return Err(Error::Config(ConfigError::InvalidRpm(config.motion.default_rpm)));
    }

    validate_homing(config)?;

    let positions = [config.positions.up_mm, config.positions.down_mm];
    for position in positions.into_iter().flatten() {
        validate_position(position)?;
    }

    Ok(())
}

fn validate_homing(config: &StageConfig) -> Result<()> {
    let homing = &config.homing;

    if homing.timeout_secs == 0 {
        return Err(Error::Config(ConfigError::InvalidHomingTimeout(homing.timeout_secs)));
    }

    if homing.rpm == 0 {
        return Err(Error::Config(ConfigError::InvalidRpm(homing.rpm)));
    }

    if !(homing.step_mm.is_finite() && homing.step_mm > 0.0) {
        return Err(Error::Config(ConfigError::InvalidHomingStep(homing.step_mm)));
    }

    validate_position(homing.start_position_mm)
}

fn validate_position(position: f32) -> Result<()> {
    if position.is_finite() && position >= 0.0 {
        Ok(())
    } else {
        Err(Error::Config(ConfigError::InvalidPosition(position)))
    }
}
