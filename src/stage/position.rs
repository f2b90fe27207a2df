//! Position planning for stage moves.
//!
//! The stage cannot travel below its origin. A move that would cross zero is
//! shortened so that it ends exactly at zero.

use crate::error::{ArgumentError, Result};
use crate::motion::Direction;

/// A move after applying the origin clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMove {
    /// Position after the move.
    pub target_mm: f32,
    /// Distance actually travelled.
    pub distance_mm: f32,
    /// Direction of travel.
    pub direction: Direction,
    /// The requested distance was shortened at the origin.
    pub clamped: bool,
}

impl PlannedMove {
    /// Plan a relative move of `distance_mm` from `current_mm`.
    ///
    /// # Errors
    ///
    /// `InvalidDistance` for a negative or non-finite distance.
    pub fn relative(current_mm: f32, distance_mm: f32, direction: Direction) -> Result<Self> {
        if !(distance_mm.is_finite() && distance_mm >= 0.0) {
            return Err(ArgumentError::InvalidDistance(distance_mm).into());
        }

        let candidate = current_mm + direction.sign() * distance_mm;
        if candidate < 0.0 {
            Ok(Self {
                target_mm: 0.0,
                distance_mm: (distance_mm + candidate).max(0.0),
                direction,
                clamped: true,
            })
        } else {
            Ok(Self {
                target_mm: candidate,
                distance_mm,
                direction,
                clamped: false,
            })
        }
    }

    /// Distance and direction from `current_mm` to `target_mm`.
    ///
    /// Equal positions count as upward.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` for a non-finite target.
    pub fn toward(current_mm: f32, target_mm: f32) -> Result<(f32, Direction)> {
        if !target_mm.is_finite() {
            return Err(ArgumentError::InvalidPosition(target_mm).into());
        }

        let delta = target_mm - current_mm;
        Ok((libm::fabsf(delta), Direction::from_up(delta >= 0.0)))
    }
}
