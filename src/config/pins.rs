//! Pin assignment table.

use serde::Deserialize;

use crate::port::PinId;

/// Maps the driver's logical lines to physical pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PinMap {
    /// Micro-stepping selector lines (MS1, MS2, MS3).
    pub micro_stepping: [PinId; 3],

    /// STEP line (one pulse per step).
    pub step: PinId,

    /// DIR line (high = up).
    pub direction: PinId,

    /// Driver enable line (active low).
    pub enable: PinId,

    /// Home limit switch input.
    pub home_endstop: PinId,
}

impl PinMap {
    /// Zika-box board. The home switch sits on A0.
    pub const ZIKA_BOX: PinMap = PinMap {
        micro_stepping: [9, 8, 7],
        step: 6,
        direction: 5,
        enable: 2,
        home_endstop: 14,
    };

    /// MR-box peripheral board. The home switch sits on PC0.
    pub const MR_BOX: PinMap = PinMap {
        micro_stepping: [8, 9, 7],
        step: 6,
        direction: 5,
        enable: 2,
        home_endstop: 14,
    };

    /// Driver output lines, in configuration order.
    pub fn outputs(&self) -> [PinId; 6] {
        let [ms1, ms2, ms3] = self.micro_stepping;
        [ms1, ms2, ms3, self.step, self.direction, self.enable]
    }

    /// Every assigned pin, outputs first.
    pub fn all(&self) -> [PinId; 7] {
        let [ms1, ms2, ms3, step, dir, en] = self.outputs();
        [ms1, ms2, ms3, step, dir, en, self.home_endstop]
    }

    /// First pin assigned to more than one role, if any.
    pub fn find_duplicate(&self) -> Option<PinId> {
        let pins = self.all();
        pins.iter()
            .enumerate()
            .find(|&(i, pin)| pins[i + 1..].contains(pin))
            .map(|(_, pin)| *pin)
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::ZIKA_BOX
    }
}
