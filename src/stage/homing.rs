//! Homing against the home limit switch.
//!
//! The stage is probed downward in short moves until the switch reports
//! "at home" or the deadline passes. Either way the position is then forced
//! to zero: a timeout is reported through [`HomingOutcome`], never as an error.

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::motion::Direction;
use crate::port::{Clock, IoPort};

use super::driver::ZStage;

/// Result of a homing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingOutcome {
    /// Home stop is disabled; nothing was done.
    Skipped,
    /// The home switch was reached.
    Homed,
    /// The deadline passed before the switch triggered. Position was
    /// zeroed anyway.
    TimedOut,
}

impl HomingOutcome {
    /// Check if the zero position is a best-effort fallback.
    #[inline]
    pub fn is_degraded(self) -> bool {
        self == HomingOutcome::TimedOut
    }
}

impl<PORT, DELAY, CLOCK> ZStage<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Drive down until the home switch triggers or the timeout elapses.
    ///
    /// No-op (and no I/O) while home stop is disabled. Otherwise the position
    /// is first set to the configured start position so every probe travels
    /// down, and is forced to 0 on exit whatever the outcome.
    ///
    /// Blocks for at most `timeout_secs` plus one probe move.
    ///
    /// # Errors
    ///
    /// Only port failures. A timeout is `Ok(HomingOutcome::TimedOut)`. After a
    /// port failure the position is still 0 and [`last_homing`](Self::last_homing)
    /// keeps the previous result.
    pub fn home(&mut self) -> Result<HomingOutcome> {
        if !self.state.home_stop_enabled {
            self.last_homing = Some(HomingOutcome::Skipped);
            return Ok(HomingOutcome::Skipped);
        }

        let homing = self.config.homing;
        info!("homing: timeout {} s", homing.timeout_secs);

        self.state.position = homing.start_position_mm;
        let probed = self.probe_for_home();
        self.state.position = 0.0;

        let (outcome, probes) = match probed {
            Ok(result) => result,
            Err(e) => {
                warn!("homing aborted by a port error, position forced to 0");
                return Err(e);
            }
        };
        self.last_homing = Some(outcome);

        match outcome {
            HomingOutcome::TimedOut => {
                warn!("homing timed out after {} probes, position forced to 0", probes)
            }
            _ => info!("homed after {} probes", probes),
        }
        Ok(outcome)
    }

    /// Probe down until the switch triggers or the deadline passes.
    ///
    /// Returns the outcome and the number of probe moves made.
    fn probe_for_home(&mut self) -> Result<(HomingOutcome, u32)> {
        let homing = self.config.homing;
        let timeout = u64::from(homing.timeout_secs);
        let start = self.clock.now_secs();

        let mut probes: u32 = 0;
        loop {
            if self.at_home()? {
                return Ok((HomingOutcome::Homed, probes));
            }
            if self.clock.now_secs().saturating_sub(start) >= timeout {
                return Ok((HomingOutcome::TimedOut, probes));
            }
            self.move_by(homing.step_mm, homing.rpm, Direction::Down)?;
            probes += 1;
        }
    }

    /// Result of the most recent `home` call that did not fail.
    #[inline]
    pub fn last_homing(&self) -> Option<HomingOutcome> {
        self.last_homing
    }

    /// Check if the last homing attempt timed out.
    #[inline]
    pub fn homing_degraded(&self) -> bool {
        self.last_homing.is_some_and(HomingOutcome::is_degraded)
    }
}
