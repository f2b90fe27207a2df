//! Motion execution - step pulse generation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::error::{Result, StageError};
use crate::port::{IoPort, PinId};

use super::timing::PulseTiming;

/// Runtime state while emitting a pulse train.
///
/// Each step is a 50% duty cycle square wave: STEP high, wait half a period,
/// STEP low, wait half a period.
#[derive(Debug, Clone)]
pub struct PulseExecutor {
    /// The timing being executed.
    timing: PulseTiming,

    /// Pulses emitted so far.
    current_step: u32,
}

impl PulseExecutor {
    /// Create a new executor for a pulse timing.
    pub fn new(timing: PulseTiming) -> Self {
        Self {
            timing,
            current_step: 0,
        }
    }

    fn is_complete(&self) -> bool {
        self.current_step >= self.timing.steps
    }

    /// Emit one pulse on `step_pin`. Returns `true` once the train is complete.
    fn step<P, D>(&mut self, port: &mut P, delay: &mut D, step_pin: PinId) -> Result<bool>
    where
        P: IoPort,
        D: DelayNs,
    {
        if self.is_complete() {
            return Ok(true);
        }

        port.write(step_pin, PinState::High)
            .map_err(|_| StageError::PinError)?;
        delay.delay_us(self.timing.half_period_us);
        port.write(step_pin, PinState::Low)
            .map_err(|_| StageError::PinError)?;
        delay.delay_us(self.timing.half_period_us);

        self.current_step += 1;
        Ok(self.is_complete())
    }

    /// Emit the remaining pulses (blocking).
    ///
    /// Stops at the first port error. Pulses already emitted are not retried.
    pub fn run_to_completion<P, D>(
        &mut self,
        port: &mut P,
        delay: &mut D,
        step_pin: PinId,
    ) -> Result<()>
    where
        P: IoPort,
        D: DelayNs,
    {
        while !self.step(port, delay, step_pin)? {}
        Ok(())
    }
}
