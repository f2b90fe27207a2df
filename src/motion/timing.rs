//! Pulse timing: step count and half-period for a move.

use crate::error::{ArgumentError, Result};

/// Full steps per millimeter of stage travel (lead screw calibration).
pub const STEPS_PER_MM: f32 = 25.0;

/// Step multiplier selected by the micro-stepping lines.
pub const MICRO_STEP_MULTIPLIER: u32 = 16;

/// Numerator of the half-period formula, in microseconds × RPM.
pub const PULSE_CONSTANT_US: u32 = 150_000;

/// Step count and per-edge delay for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// Number of step pulses to emit.
    pub steps: u32,
    /// Delay after each edge in microseconds (half the step period).
    pub half_period_us: u32,
}

impl PulseTiming {
    /// Compute the timing of a move.
    ///
    /// `half_period_us = 150000 / rpm / multiplier` with integer truncation and
    /// `steps = floor(distance_mm * 25 * multiplier)`, where the multiplier is
    /// 16 with micro-stepping and 1 without.
    ///
    /// # Errors
    ///
    /// `InvalidRpm` for `rpm == 0`, `InvalidDistance` for a negative or
    /// non-finite distance.
    pub fn compute(distance_mm: f32, rpm: u32, micro_stepping: bool) -> Result<Self> {
        if rpm == 0 {
            return Err(ArgumentError::InvalidRpm(rpm).into());
        }
        if !(distance_mm.is_finite() && distance_mm >= 0.0) {
            return Err(ArgumentError::InvalidDistance(distance_mm).into());
        }

        let multiplier = multiplier(micro_stepping);
        let half_period_us = PULSE_CONSTANT_US / rpm / multiplier;
        // float -> int casts truncate toward zero and saturate
        let steps = (distance_mm * STEPS_PER_MM * multiplier as f32) as u32;

        Ok(Self {
            steps,
            half_period_us,
        })
    }

    /// Total blocking time of the pulse train in microseconds.
    #[inline]
    pub fn duration_us(&self) -> u64 {
        self.steps as u64 * 2 * self.half_period_us as u64
    }
}

/// Step multiplier for the given micro-stepping mode.
#[inline]
pub fn multiplier(micro_stepping: bool) -> u32 {
    if micro_stepping {
        MICRO_STEP_MULTIPLIER
    } else {
        1
    }
}
