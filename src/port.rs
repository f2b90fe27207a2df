//! Digital I/O port capability.
//!
//! The stage never touches hardware registers directly. It is handed an
//! [`IoPort`] addressed by pin number, a [`DelayNs`](embedded_hal::delay::DelayNs)
//! for pulse timing and a [`Clock`] for the homing deadline.

use embedded_hal::digital::{ErrorType, PinState};

/// Physical pin identifier, as printed on the board's pin table.
pub type PinId = u8;

/// Full-scale value of a 10-bit analog sample.
pub const ANALOG_FULL_SCALE: u16 = 1024;

/// Electrical mode of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output.
    Output,
    /// Floating input.
    Input,
    /// Input with the internal pull-up enabled.
    InputPullUp,
}

/// Pin-addressed digital and analog I/O.
///
/// Errors follow embedded-hal: `Self::Error` implements
/// [`embedded_hal::digital::Error`]. Ports that cannot fail use
/// [`core::convert::Infallible`].
pub trait IoPort: ErrorType {
    /// Set the electrical mode of `pin`.
    fn configure(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive `pin` to `level`.
    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), Self::Error>;

    /// Sample the digital level of `pin`.
    fn read(&mut self, pin: PinId) -> Result<PinState, Self::Error>;

    /// Sample `pin` through the ADC, `0..ANALOG_FULL_SCALE`.
    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error>;
}

impl<T: IoPort + ?Sized> IoPort for &mut T {
    #[inline]
    fn configure(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        T::configure(self, pin, mode)
    }

    #[inline]
    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), Self::Error> {
        T::write(self, pin, level)
    }

    #[inline]
    fn read(&mut self, pin: PinId) -> Result<PinState, Self::Error> {
        T::read(self, pin)
    }

    #[inline]
    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error> {
        T::read_analog(self, pin)
    }
}

/// Coarse monotonic time source with whole-second resolution.
pub trait Clock {
    /// Seconds elapsed since an arbitrary fixed origin.
    fn now_secs(&mut self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    #[inline]
    fn now_secs(&mut self) -> u64 {
        T::now_secs(self)
    }
}

/// Wall clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_secs(&mut self) -> u64 {
        self.origin.elapsed().as_secs()
    }
}
