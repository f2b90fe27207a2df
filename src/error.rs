//! Error types for the zstage library.
//!
//! Provides unified error handling across configuration, stage I/O and argument checks.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all zstage operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Stage operation error
    Stage(StageError),
    /// A motion request carried an argument outside its domain
    InvalidArgument(ArgumentError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// The same physical pin is assigned to two roles
    DuplicatePin(u8),
    /// RPM must be > 0
    InvalidRpm(u32),
    /// Homing timeout must be at least one second
    InvalidHomingTimeout(u32),
    /// Homing step must be finite and > 0
    InvalidHomingStep(f32),
    /// Analog threshold must be within 1..=1024
    InvalidAnalogThreshold(u16),
    /// A configured position is negative or not finite
    InvalidPosition(f32),
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Stage operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
    /// Pin operation failed
    PinError,
    /// A named position was requested but is absent from the configuration
    PositionNotConfigured(&'static str),
}

/// Rejected motion arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// RPM of zero would divide by zero in the pulse timing
    InvalidRpm(u32),
    /// Distance must be finite and >= 0
    InvalidDistance(f32),
    /// Target position must be finite
    InvalidPosition(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Stage(e) => write!(f, "Stage error: {}", e),
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is assigned to more than one role", pin),
            ConfigError::InvalidRpm(v) => write!(f, "Invalid RPM: {}. Must be > 0", v),
            ConfigError::InvalidHomingTimeout(v) => {
                write!(f, "Invalid homing timeout: {}s. Must be > 0", v)
            }
            ConfigError::InvalidHomingStep(v) => write!(f, "Invalid homing step: {} mm. Must be > 0", v),
            ConfigError::InvalidAnalogThreshold(v) => {
                write!(f, "Invalid analog threshold: {}. Must be 1-1024", v)
            }
            ConfigError::InvalidPosition(v) => write!(f, "Invalid position: {} mm. Must be >= 0", v),
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::PinError => write!(f, "GPIO pin operation failed"),
            StageError::PositionNotConfigured(name) => {
                write!(f, "Position '{}' is not configured", name)
            }
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::InvalidRpm(v) => write!(f, "RPM {} must be > 0", v),
            ArgumentError::InvalidDistance(v) => write!(f, "distance {} mm must be finite and >= 0", v),
            ArgumentError::InvalidPosition(v) => write!(f, "position {} mm must be finite", v),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<StageError> for Error {
    fn from(e: StageError) -> Self {
        Error::Stage(e)
    }
}

impl From<ArgumentError> for Error {
    fn from(e: ArgumentError) -> Self {
        Error::InvalidArgument(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StageError {}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}
