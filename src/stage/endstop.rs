//! Home limit switch.

use embedded_hal::digital::PinState;

use crate::config::{EndstopConfig, EndstopKind};
use crate::error::{Result, StageError};
use crate::port::{IoPort, PinId};

/// Home switch sensor.
///
/// A single sample is authoritative; there is no debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endstop {
    pin: PinId,
    config: EndstopConfig,
}

impl Endstop {
    /// Sensor on `pin` read with the given strategy.
    pub fn new(pin: PinId, config: EndstopConfig) -> Self {
        Self { pin, config }
    }

    /// Configure the input pin for the read strategy.
    pub fn init<P: IoPort>(&self, port: &mut P) -> Result<()> {
        port.configure(self.pin, self.config.kind.pin_mode())
            .map_err(|_| StageError::PinError)?;
        Ok(())
    }

    /// Sample the switch. `true` means the stage is at home.
    pub fn triggered<P: IoPort>(&self, port: &mut P) -> Result<bool> {
        match self.config.kind {
            EndstopKind::AnalogThreshold => {
                let sample = port.read_analog(self.pin).map_err(|_| StageError::PinError)?;
                Ok(sample < self.config.analog_threshold)
            }
            EndstopKind::DigitalPullUp => {
                let level = port.read(self.pin).map_err(|_| StageError::PinError)?;
                Ok(level == PinState::Low)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::PinMode;
    use core::convert::Infallible;

    struct FixedInput {
        level: PinState,
        sample: u16,
        mode: Option<PinMode>,
    }

    impl embedded_hal::digital::ErrorType for FixedInput {
        type Error = Infallible;
    }

    impl IoPort for FixedInput {
        fn configure(&mut self, _pin: PinId, mode: PinMode) -> core::result::Result<(), Infallible> {
            self.mode = Some(mode);
            Ok(())
        }

        fn write(&mut self, _pin: PinId, _level: PinState) -> core::result::Result<(), Infallible> {
            Ok(())
        }

        fn read(&mut self, _pin: PinId) -> core::result::Result<PinState, Infallible> {
            Ok(self.level)
        }

        fn read_analog(&mut self, _pin: PinId) -> core::result::Result<u16, Infallible> {
            Ok(self.sample)
        }
    }

    fn input(level: PinState, sample: u16) -> FixedInput {
        FixedInput {
            level,
            sample,
            mode: None,
        }
    }

    #[test]
    fn test_analog_threshold() {
        let endstop = Endstop::new(14, EndstopConfig::analog());

        assert!(endstop.triggered(&mut input(PinState::High, 0)).unwrap());
        assert!(endstop.triggered(&mut input(PinState::High, 255)).unwrap());
        assert!(!endstop.triggered(&mut input(PinState::Low, 256)).unwrap());
        assert!(!endstop.triggered(&mut input(PinState::Low, 1023)).unwrap());
    }

    #[test]
    fn test_digital_pull_up_is_active_low() {
        let endstop = Endstop::new(14, EndstopConfig::digital_pull_up());

        assert!(endstop.triggered(&mut input(PinState::Low, 1023)).unwrap());
        assert!(!endstop.triggered(&mut input(PinState::High, 0)).unwrap());
    }

    #[test]
    fn test_init_selects_pull_up() {
        let mut port = input(PinState::High, 0);
        Endstop::new(14, EndstopConfig::digital_pull_up())
            .init(&mut port)
            .unwrap();
        assert_eq!(port.mode, Some(PinMode::InputPullUp));

        Endstop::new(14, EndstopConfig::analog()).init(&mut port).unwrap();
        assert_eq!(port.mode, Some(PinMode::Input));
    }
}
