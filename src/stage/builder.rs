//! Builder pattern for ZStage.

use embedded_hal::delay::DelayNs;

use crate::config::{validate_config, EndstopConfig, PinMap, StageConfig};
use crate::error::{ConfigError, Error, Result};
use crate::port::{Clock, IoPort};

use super::driver::ZStage;

/// Builder for creating ZStage instances.
pub struct ZStageBuilder<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    port: Option<PORT>,
    delay: Option<DELAY>,
    clock: Option<CLOCK>,
    config: StageConfig,
}

impl<PORT, DELAY, CLOCK> Default for ZStageBuilder<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PORT, DELAY, CLOCK> ZStageBuilder<PORT, DELAY, CLOCK>
where
    PORT: IoPort,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Create a new builder with the default (zika-box) configuration.
    pub fn new() -> Self {
        Self {
            port: None,
            delay: None,
            clock: None,
            config: StageConfig::default(),
        }
    }

    /// Set the I/O port.
    pub fn port(mut self, port: PORT) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the homing clock.
    pub fn clock(mut self, clock: CLOCK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StageConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the pin assignments.
    pub fn pins(mut self, pins: PinMap) -> Self {
        self.config.pins = pins;
        self
    }

    /// Override the endstop wiring.
    pub fn endstop(mut self, endstop: EndstopConfig) -> Self {
        self.config.endstop = endstop;
        self
    }

    /// Validate the configuration, configure the pins and reset the stage.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the configuration
    /// is invalid or the port fails during initialization.
    pub fn build(self) -> Result<ZStage<PORT, DELAY, CLOCK>> {
        let port = self
            .port
            .ok_or(Error::Config(ConfigError::MissingField("port")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;
        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;

        validate_config(&self.config)?;

        ZStage::new(port, delay, clock, self.config)
    }
}
