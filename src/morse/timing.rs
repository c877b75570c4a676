// src/morse/timing.rs  —  WPM → unit time (PARIS standard)

/// Milliseconds in one unit at 1 WPM
pub const PARIS_MS: u64 = 1200;

/// All element lengths are whole multiples of one unit: dot and element gap
/// 1, dash and character gap 3, word gap 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub unit_ms: u64,
}

impl Timing {
    /// PARIS standard: dot = 1200 ms / wpm, truncated to whole milliseconds.
    /// `wpm` must be non-zero; callers validate it first.
    pub fn from_wpm(wpm: u32) -> Self {
        Self { unit_ms: PARIS_MS / wpm as u64 }
    }

    /// Frames in one unit at `sample_rate`. Every element length is an exact
    /// multiple of this, so long messages never drift.
    pub fn unit_frames(&self, sample_rate: u32) -> u64 {
        (self.unit_ms * sample_rate as u64 + 500) / 1000
    }
}
