//! Z-stage motion controller.
//!
//! Generic over the pin-addressed [`IoPort`], an embedded-hal 1.0 delay and a
//! coarse [`Clock`] used by homing.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::config::{PinMap, SetPositionMode, StageConfig};
use crate::error::{ArgumentError, Result, StageError};
use crate::motion::{Direction, PulseExecutor, PulseTiming};
use crate::port::{Clock, IoPort, PinId, PinMode};

use super::builder::ZStageBuilder;
use super::endstop::Endstop;
use super::homing::HomingOutcome;
use super::position::PlannedMove;
use super::state::{StageState, StageUpdate};

/// Stepper-driven linear stage with a single home switch.
///
/// All operations are blocking and non-reentrant: a move occupies the calling
/// thread for `steps × 2 × half_period` microseconds, homing for at most the
/// configured timeout (plus the final probe move).
///
/// Generic over:
/// - `PORT`: Pin-addressed I/O (must implement [`IoPort`])
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `CLOCK`: Whole-second time source for the homing deadline
pub struct ZStage<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Digital I/O port.
    pub(super) port: PORT,

    /// Delay provider for step timing.
    pub(super) delay: DELAY,

    /// Time source for the homing deadline.
    pub(super) clock: CLOCK,

    /// Pin assignments.
    pins: PinMap,

    /// Home switch.
    endstop: Endstop,

    /// Configuration the stage was built from.
    pub(super) config: StageConfig,

    /// Logical state.
    pub(super) state: StageState,

    /// Result of the most recent `home` call.
    pub(super) last_homing: Option<HomingOutcome>,
}

impl<PORT, DELAY, CLOCK> ZStage<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Start building a stage.
    pub fn builder() -> ZStageBuilder<PORT, DELAY, CLOCK> {
        ZStageBuilder::new()
    }

    /// Configure the driver lines and reset the stage.
    ///
    /// Outputs are configured, DIR is driven low, then `reset` leaves the
    /// motor disabled with micro-stepping selected.
    pub(crate) fn new(port: PORT, delay: DELAY, clock: CLOCK, config: StageConfig) -> Result<Self> {
        let mut stage = Self {
            port,
            delay,
            clock,
            pins: config.pins,
            endstop: Endstop::new(config.pins.home_endstop, config.endstop),
            state: StageState::reset(config.motion.default_rpm),
            config,
            last_homing: None,
        };

        for pin in stage.pins.outputs() {
            stage
                .port
                .configure(pin, PinMode::Output)
                .map_err(|_| StageError::PinError)?;
        }
        stage.endstop.init(&mut stage.port)?;
        stage.write(stage.pins.direction, PinState::Low)?;

        stage.reset()?;
        Ok(stage)
    }

    /// Return the stage to its power-on state.
    ///
    /// Position 0, motor disabled, micro-stepping enabled, default RPM,
    /// home stop enabled, engaged stop disabled.
    pub fn reset(&mut self) -> Result<()> {
        self.state.position = 0.0;
        self.disable_motor()?;
        self.enable_micro_stepping()?;
        self.state.rpm = self.config.motion.default_rpm;
        self.state.home_stop_enabled = true;
        self.state.engaged_stop_enabled = false;
        Ok(())
    }

    /// Move `distance_mm` in `direction` at `rpm` (blocking).
    ///
    /// A downward move that would cross the origin is shortened to end at 0.
    /// The motor is enabled for the move if needed and disabled again only if
    /// it was disabled on entry.
    ///
    /// Returns the new position.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a zero RPM or a negative/non-finite distance,
    /// checked before any pin is touched. `PinError` if the port fails.
    pub fn move_by(&mut self, distance_mm: f32, rpm: u32, direction: Direction) -> Result<f32> {
        let planned = PlannedMove::relative(self.state.position, distance_mm, direction)?;
        let timing = PulseTiming::compute(planned.distance_mm, rpm, self.state.micro_stepping)?;

        if planned.clamped {
            debug!(
                "move clamped at origin: requested {} mm, travelling {} mm",
                distance_mm,
                planned.distance_mm
            );
        }
        debug!(
            "move {} mm up={}: {} steps, {} us per edge, {} us total",
            planned.distance_mm,
            direction == Direction::Up,
            timing.steps,
            timing.half_period_us,
            timing.duration_us()
        );

        let was_enabled = self.state.motor_enabled;
        if !was_enabled {
            self.enable_motor()?;
        }

        let driven = self.drive(direction, timing);
        if driven.is_ok() {
            self.state.position = planned.target_mm;
        }

        if !was_enabled {
            let restored = self.disable_motor();
            driven?;
            restored?;
        } else {
            driven?;
        }

        Ok(self.state.position)
    }

    /// Move to an absolute position at the configured RPM (blocking).
    ///
    /// Returns the new position, which is 0 for negative targets.
    pub fn move_to(&mut self, target_mm: f32) -> Result<f32> {
        let (distance, direction) = PlannedMove::toward(self.state.position, target_mm)?;
        self.move_by(distance, self.state.rpm, direction)
    }

    /// Set the stage position.
    ///
    /// With [`SetPositionMode::MoveThenRecord`] the stage moves to `position_mm`
    /// and records where it ended. With [`SetPositionMode::OverwriteThenMove`]
    /// the stored position is overwritten first, so the following move has
    /// zero length and the stage is re-referenced where it stands.
    pub fn set_position(&mut self, position_mm: f32) -> Result<()> {
        if !position_mm.is_finite() {
            return Err(ArgumentError::InvalidPosition(position_mm).into());
        }

        if self.config.set_position == SetPositionMode::OverwriteThenMove {
            self.state.position = position_mm;
        }
        self.move_to(position_mm)?;
        Ok(())
    }

    /// Set the RPM used by `move_to`.
    pub fn set_rpm(&mut self, rpm: u32) -> Result<()> {
        if rpm == 0 {
            return Err(ArgumentError::InvalidRpm(rpm).into());
        }
        self.state.rpm = rpm;
        Ok(())
    }

    /// Power the driver (enable line low).
    pub fn enable_motor(&mut self) -> Result<()> {
        self.write(self.pins.enable, PinState::Low)?;
        self.state.motor_enabled = true;
        Ok(())
    }

    /// Release the driver (enable line high).
    pub fn disable_motor(&mut self) -> Result<()> {
        self.write(self.pins.enable, PinState::High)?;
        self.state.motor_enabled = false;
        Ok(())
    }

    /// Select 16× micro-stepping (all selector lines high).
    pub fn enable_micro_stepping(&mut self) -> Result<()> {
        self.write_micro_stepping(PinState::High)?;
        self.state.micro_stepping = true;
        Ok(())
    }

    /// Select full steps (all selector lines low).
    pub fn disable_micro_stepping(&mut self) -> Result<()> {
        self.write_micro_stepping(PinState::Low)?;
        self.state.micro_stepping = false;
        Ok(())
    }

    /// Enable home switch checks.
    pub fn enable_home_stop(&mut self) {
        self.state.home_stop_enabled = true;
    }

    /// Disable home switch checks. `home` becomes a no-op.
    pub fn disable_home_stop(&mut self) {
        self.state.home_stop_enabled = false;
    }

    /// Set the reserved engaged-stop flag.
    pub fn enable_engaged_stop(&mut self) {
        self.state.engaged_stop_enabled = true;
    }

    /// Clear the reserved engaged-stop flag.
    pub fn disable_engaged_stop(&mut self) {
        self.state.engaged_stop_enabled = false;
    }

    /// Check the home switch.
    ///
    /// Always `false` without touching the port while home stop is disabled.
    pub fn at_home(&mut self) -> Result<bool> {
        if !self.state.home_stop_enabled {
            return Ok(false);
        }
        self.endstop.triggered(&mut self.port)
    }

    /// Move to the configured up position.
    pub fn up(&mut self) -> Result<f32> {
        let target = self.named_position("up", self.config.positions.up_mm)?;
        self.move_to(target)
    }

    /// Move to the configured down position.
    pub fn down(&mut self) -> Result<f32> {
        let target = self.named_position("down", self.config.positions.down_mm)?;
        self.move_to(target)
    }

    /// Check if the stage sits at the configured up position.
    pub fn is_up(&self) -> Result<bool> {
        let target = self.named_position("up", self.config.positions.up_mm)?;
        Ok(self.state.position == target)
    }

    /// Check if the stage sits at the configured down position.
    pub fn is_down(&self) -> Result<bool> {
        let target = self.named_position("down", self.config.positions.down_mm)?;
        Ok(self.state.position == target)
    }

    /// Apply a partial state update.
    pub fn apply(&mut self, update: StageUpdate) -> Result<()> {
        if update.is_empty() {
            trace!("empty state update ignored");
            return Ok(());
        }
        match update.motor_enabled {
            Some(true) => self.enable_motor()?,
            Some(false) => self.disable_motor()?,
            None => {}
        }
        match update.micro_stepping {
            Some(true) => self.enable_micro_stepping()?,
            Some(false) => self.disable_micro_stepping()?,
            None => {}
        }
        match update.home_stop_enabled {
            Some(true) => self.enable_home_stop(),
            Some(false) => self.disable_home_stop(),
            None => {}
        }
        match update.engaged_stop_enabled {
            Some(true) => self.enable_engaged_stop(),
            Some(false) => self.disable_engaged_stop(),
            None => {}
        }
        if let Some(rpm) = update.rpm {
            self.set_rpm(rpm)?;
        }
        if let Some(position) = update.position {
            self.set_position(position)?;
        }
        Ok(())
    }

    /// Get current position in millimeters.
    #[inline]
    pub fn position(&self) -> f32 {
        self.state.position
    }

    /// Check if the driver is powered.
    #[inline]
    pub fn motor_enabled(&self) -> bool {
        self.state.motor_enabled
    }

    /// Check if micro-stepping is selected.
    #[inline]
    pub fn micro_stepping(&self) -> bool {
        self.state.micro_stepping
    }

    /// Get the RPM used by `move_to`.
    #[inline]
    pub fn rpm(&self) -> u32 {
        self.state.rpm
    }

    /// Check if home switch checks are enabled.
    #[inline]
    pub fn home_stop_enabled(&self) -> bool {
        self.state.home_stop_enabled
    }

    /// Check the reserved engaged-stop flag.
    #[inline]
    pub fn engaged_stop_enabled(&self) -> bool {
        self.state.engaged_stop_enabled
    }

    /// Snapshot of the whole state.
    #[inline]
    pub fn state(&self) -> StageState {
        self.state
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Get the I/O port.
    #[inline]
    pub fn port(&self) -> &PORT {
        &self.port
    }

    /// Give back the port, delay and clock.
    pub fn release(self) -> (PORT, DELAY, CLOCK) {
        (self.port, self.delay, self.clock)
    }

    fn drive(&mut self, direction: Direction, timing: PulseTiming) -> Result<()> {
        self.write(self.pins.direction, direction.pin_state())?;
        PulseExecutor::new(timing).run_to_completion(&mut self.port, &mut self.delay, self.pins.step)
    }

    fn write_micro_stepping(&mut self, level: PinState) -> Result<()> {
        for pin in self.pins.micro_stepping {
            self.write(pin, level)?;
        }
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: PinState) -> Result<()> {
        self.port.write(pin, level).map_err(|_| StageError::PinError)?;
        Ok(())
    }

    fn named_position(&self, name: &'static str, position: Option<f32>) -> Result<f32> {
        position.ok_or_else(|| StageError::PositionNotConfigured(name).into())
    }
}
