//! Home switch wiring.

use serde::Deserialize;

use crate::port::{PinMode, ANALOG_FULL_SCALE};

/// How the home switch is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndstopKind {
    /// Unconditioned switch on an analog-only channel. A sample below the
    /// threshold means the switch is closed.
    #[default]
    AnalogThreshold,
    /// Switch to ground on a digital input with the internal pull-up enabled.
    /// A low level means the switch is closed.
    DigitalPullUp,
}

impl EndstopKind {
    /// Pin mode the endstop input must be configured with.
    pub fn pin_mode(self) -> PinMode {
        match self {
            // ADC-only channels have no pull-up
            EndstopKind::AnalogThreshold => PinMode::Input,
            EndstopKind::DigitalPullUp => PinMode::InputPullUp,
        }
    }
}

/// Endstop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EndstopConfig {
    /// Read strategy.
    #[serde(default)]
    pub kind: EndstopKind,

    /// Samples strictly below this count as "at home" (analog strategy only).
    #[serde(default = "default_analog_threshold")]
    pub analog_threshold: u16,
}

fn default_analog_threshold() -> u16 {
    ANALOG_FULL_SCALE / 4
}

impl EndstopConfig {
    /// Analog strategy with the default quarter-scale threshold.
    pub const fn analog() -> Self {
        Self {
            kind: EndstopKind::AnalogThreshold,
            analog_threshold: ANALOG_FULL_SCALE / 4,
        }
    }

    /// Pulled-up digital strategy.
    pub const fn digital_pull_up() -> Self {
        Self {
            kind: EndstopKind::DigitalPullUp,
            analog_threshold: ANALOG_FULL_SCALE / 4,
        }
    }

    /// Check the threshold lies within the ADC range.
    pub fn is_valid(&self) -> bool {
        (1..=ANALOG_FULL_SCALE).contains(&self.analog_threshold)
    }
}

impl Default for EndstopConfig {
    fn default() -> Self {
        Self::analog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_quarter_scale() {
        assert_eq!(EndstopConfig::default().analog_threshold, 256);
    }

    #[test]
    fn test_pin_modes() {
        assert_eq!(EndstopKind::AnalogThreshold.pin_mode(), PinMode::Input);
        assert_eq!(EndstopKind::DigitalPullUp.pin_mode(), PinMode::InputPullUp);
    }

    #[test]
    fn test_threshold_bounds() {
        let mut config = EndstopConfig::analog();
        assert!(config.is_valid());
        config.analog_threshold = 0;
        assert!(!config.is_valid());
        config.analog_threshold = 1025;
        assert!(!config.is_valid());
    }
}
