//! Simulated hardware shared by the integration tests.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, PinState};
use embedded_hal_mock::eh1::delay::NoopDelay;
use zstage::{Clock, IoPort, PinId, PinMode, StageConfig, ZStage};

/// One recorded port operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(PinId, PinMode),
    Write(PinId, PinState),
    Read(PinId),
    ReadAnalog(PinId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

impl embedded_hal::digital::Error for SimError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// In-memory port with a scripted home switch.
///
/// The switch reports "not home" for the first `home_after` samples and
/// "at home" afterwards. `None` means it never triggers.
#[derive(Debug, Default)]
pub struct SimPort {
    pub events: Vec<Event>,
    pub recording: bool,
    pub home_after: Option<usize>,
    pub samples: usize,
    pub step_pulses: u64,
    pub fail_writes_to: Option<PinId>,
}

impl SimPort {
    pub fn new() -> Self {
        Self {
            recording: true,
            ..Self::default()
        }
    }

    /// Switch triggers after `samples` reads.
    pub fn homing_after(samples: usize) -> Self {
        Self {
            home_after: Some(samples),
            ..Self::new()
        }
    }

    /// Switch never triggers and events are not kept.
    pub fn never_home_quiet() -> Self {
        Self::default()
    }

    fn at_home(&mut self) -> bool {
        let sample = self.samples;
        self.samples += 1;
        self.home_after.map_or(false, |n| sample >= n)
    }

    fn record(&mut self, event: Event) {
        if self.recording {
            self.events.push(event);
        }
    }

    /// Events recorded since index `mark`.
    pub fn since(&self, mark: usize) -> &[Event] {
        &self.events[mark..]
    }

    /// Writes to `pin` since `mark`.
    pub fn writes_to(&self, pin: PinId, mark: usize) -> Vec<PinState> {
        self.since(mark)
            .iter()
            .filter_map(|e| match e {
                Event::Write(p, level) if *p == pin => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Rising edges on `pin` since `mark`.
    pub fn pulses_on(&self, pin: PinId, mark: usize) -> usize {
        self.writes_to(pin, mark)
            .into_iter()
            .filter(|l| *l == PinState::High)
            .count()
    }

    /// Last level written to `pin`.
    pub fn level(&self, pin: PinId) -> Option<PinState> {
        self.writes_to(pin, 0).last().copied()
    }
}

impl ErrorType for SimPort {
    type Error = SimError;
}

impl IoPort for SimPort {
    fn configure(&mut self, pin: PinId, mode: PinMode) -> Result<(), SimError> {
        self.record(Event::Configure(pin, mode));
        Ok(())
    }

    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), SimError> {
        if self.fail_writes_to == Some(pin) {
            return Err(SimError);
        }
        if pin == STEP_PIN && level == PinState::High {
            self.step_pulses += 1;
        }
        self.record(Event::Write(pin, level));
        Ok(())
    }

    fn read(&mut self, pin: PinId) -> Result<PinState, SimError> {
        self.record(Event::Read(pin));
        Ok(if self.at_home() {
            PinState::Low
        } else {
            PinState::High
        })
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, SimError> {
        self.record(Event::ReadAnalog(pin));
        Ok(if self.at_home() { 12 } else { 1015 })
    }
}

/// STEP pin shared by both board presets.
pub const STEP_PIN: PinId = 6;

/// Clock that advances one second every `calls_per_sec` reads.
#[derive(Debug)]
pub struct FakeClock {
    pub calls: u64,
    pub calls_per_sec: u64,
}

impl FakeClock {
    pub fn new(calls_per_sec: u64) -> Self {
        Self {
            calls: 0,
            calls_per_sec,
        }
    }
}

impl Clock for FakeClock {
    fn now_secs(&mut self) -> u64 {
        let now = self.calls / self.calls_per_sec;
        self.calls += 1;
        now
    }
}

/// Delay that sums the requested time instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

pub type SimStage = ZStage<SimPort, NoopDelay, FakeClock>;

/// Zika-box stage on a fresh simulated port.
pub fn stage() -> SimStage {
    stage_with(StageConfig::zika_box(), SimPort::new())
}

pub fn stage_with(config: StageConfig, port: SimPort) -> SimStage {
    ZStage::builder()
        .config(config)
        .port(port)
        .delay(NoopDelay::new())
        .clock(FakeClock::new(4))
        .build()
        .expect("simulated stage should build")
}

/// Stage with a recording delay for timing checks.
pub fn timed_stage() -> ZStage<SimPort, RecordingDelay, FakeClock> {
    ZStage::builder()
        .config(StageConfig::zika_box())
        .port(SimPort::new())
        .delay(RecordingDelay::default())
        .clock(FakeClock::new(4))
        .build()
        .expect("simulated stage should build")
}
