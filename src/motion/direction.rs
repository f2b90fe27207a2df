//! Travel direction.

use embedded_hal::digital::PinState;

/// Direction of stage travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Away from the home switch (position increases).
    Up,
    /// Toward the home switch (position decreases).
    Down,
}

impl Direction {
    /// Direction from the `direction_up` flag used by the move API.
    #[inline]
    pub fn from_up(up: bool) -> Self {
        if up {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Level driven on the DIR line.
    #[inline]
    pub fn pin_state(self) -> PinState {
        match self {
            Direction::Up => PinState::High,
            Direction::Down => PinState::Low,
        }
    }

    /// Sign of the position change.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}
