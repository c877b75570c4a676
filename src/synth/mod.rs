// src/synth/mod.rs  —  Message → segment plan → SampleStream
pub mod generator;
pub mod stream;

pub use generator::{Generator, SineWave, WhiteNoise};
pub use stream::{SampleStream, Segment, SegmentKind};

use crate::error::SynthesisError;
use crate::morse::{self, EncodedMessage, Timing};

/// Sample rate used by [`build`]
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Tone parameters for one message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output amplitude, 0..=1
    pub gain:      f32,
    /// Tone pitch in Hz
    pub frequency: f32,
    /// Words per minute
    pub wpm:       u32,
}

impl SynthConfig {
    pub fn new(gain: f32, frequency: f32, wpm: u32) -> Self {
        Self { gain, frequency, wpm }
    }

    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(SynthesisError::config("gain", self.gain, "must be within [0, 1]"));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(SynthesisError::config("frequency", self.frequency, "must be a positive number of Hz"));
        }
        if self.wpm == 0 {
            return Err(SynthesisError::config("wpm", self.wpm, "must be greater than 0"));
        }
        if Timing::from_wpm(self.wpm).unit_ms == 0 {
            return Err(SynthesisError::config("wpm", self.wpm, "dot would be shorter than 1 ms"));
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing { Timing::from_wpm(self.wpm) }
}

/// Build the sample stream for `message` at [`DEFAULT_SAMPLE_RATE`].
pub fn build(message: &str, config: &SynthConfig) -> Result<SampleStream, SynthesisError> {
    build_at(message, config, DEFAULT_SAMPLE_RATE)
}

/// Build the sample stream for `message` at a caller-chosen sample rate,
/// e.g. the output device's native rate.
pub fn build_at(
    message: &str,
    config: &SynthConfig,
    sample_rate: u32,
) -> Result<SampleStream, SynthesisError> {
    config.validate()?;
    if sample_rate == 0 {
        return Err(SynthesisError::config("sample_rate", sample_rate, "must be greater than 0"));
    }
    let unit = config.timing().unit_frames(sample_rate);
    if unit == 0 {
        return Err(SynthesisError::config(
            "sample_rate", sample_rate, "too low to hold one dot at this wpm",
        ));
    }

    let code = morse::translate(message)?;
    if code.is_empty() {
        log::debug!("[synth] empty message → zero-length stream");
        return Ok(SampleStream::empty(sample_rate));
    }

    let plan = plan(&code, unit);
    let tone = SineWave::new(sample_rate, config.frequency, config.gain);
    let stream = SampleStream::new(plan, tone, sample_rate);
    log::debug!(
        "[synth] '{}' → {} segments, {} frames ({:?}) at {} wpm / {} Hz",
        code, stream.segments().len(), stream.total_frames(), stream.duration(),
        config.wpm, config.frequency,
    );
    Ok(stream)
}

/// Flatten words → groups → symbols into tone/silence runs, `unit` frames per unit.
fn plan(code: &EncodedMessage, unit: u64) -> Vec<Segment> {
    let mut segs = Vec::new();
    let mut push = |kind, units: u64| segs.push(Segment { kind, frames: units * unit });

    for (wi, word) in code.words().iter().enumerate() {
        if wi > 0 { push(SegmentKind::Silence, 7); }
        for (gi, group) in word.iter().enumerate() {
            if gi > 0 { push(SegmentKind::Silence, 3); }
            for (si, sym) in group.symbols().iter().enumerate() {
                if si > 0 { push(SegmentKind::Silence, 1); }
                push(SegmentKind::Tone, sym.units());
            }
        }
    }
    segs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SynthConfig { SynthConfig::new(0.5, 700.0, 30) }

    // 30 wpm → 40 ms → 1764 frames at 44.1 kHz
    const UNIT: u64 = 1764;

    #[test]
    fn e_is_one_unit_and_t_is_three() {
        assert_eq!(build("E", &cfg()).unwrap().total_frames(), UNIT);
        assert_eq!(build("T", &cfg()).unwrap().total_frames(), 3 * UNIT);
        assert_eq!(build("E", &cfg()).unwrap().duration().as_millis(), 40);
    }

    #[test]
    fn paris_length() {
        let s = build("PARIS", &cfg()).unwrap();
        assert_eq!(s.total_frames(), 43 * UNIT);
    }

    #[test]
    fn plan_for_a_n() {
        // A = .-  N = -.
        let s = build("A N", &cfg()).unwrap();
        let plan: Vec<(SegmentKind, u64)> =
            s.segments().iter().map(|g| (g.kind, g.frames / UNIT)).collect();
        use SegmentKind::*;
        assert_eq!(plan, vec![
            (Tone, 1), (Silence, 1), (Tone, 3),
            (Silence, 7),
            (Tone, 3), (Silence, 1), (Tone, 1),
        ]);
    }

    #[test]
    fn prosign_has_no_letter_gap() {
        let sk = build("<SK>", &cfg()).unwrap();
        let plain = build("SK", &cfg()).unwrap();
        assert!(sk.segments().iter().all(|g| g.frames <= 3 * UNIT));
        assert_eq!(plain.total_frames() - sk.total_frames(), 2 * UNIT);
    }

    #[test]
    fn total_is_sum_of_segments_without_drift() {
        let msg = "CQ CQ CQ DE BA1ZZZ BA1ZZZ BA1ZZZ PSE K ".repeat(20);
        for wpm in [5, 7, 13, 25, 30, 50] {
            let c = SynthConfig::new(0.5, 700.0, wpm);
            for rate in [8_000, 44_100, 48_000] {
                let s = build_at(&msg, &c, rate).unwrap();
                let unit = c.timing().unit_frames(rate);
                let code = morse::translate(&msg).unwrap();
                let sum: u64 = s.segments().iter().map(|g| g.frames).sum();
                assert_eq!(s.total_frames(), sum);
                assert_eq!(s.total_frames(), code.units() * unit);
                assert!(s.segments().iter().all(|g| g.frames % unit == 0));
            }
        }
    }

    #[test]
    fn pulled_samples_match_total() {
        let s = build("CQ DE K", &cfg()).unwrap();
        let total = s.total_frames();
        assert_eq!(s.count() as u64, total);
    }

    #[test]
    fn tones_bounded_by_gain_and_gaps_silent() {
        let c = SynthConfig::new(0.25, 600.0, 40);
        let mut s = build("R", &c).unwrap();
        let segs = s.segments().to_vec();
        for seg in segs {
            let chunk: Vec<f32> = (&mut s).take(seg.frames as usize).collect();
            match seg.kind {
                SegmentKind::Tone    => {
                    assert!(chunk.iter().all(|v| v.abs() <= 0.25 + 1e-6));
                    assert!(chunk.iter().any(|v| v.abs() > 0.2));
                }
                SegmentKind::Silence => assert!(chunk.iter().all(|&v| v == 0.0)),
            }
        }
        assert_eq!(s.next(), None);
    }

    #[test]
    fn empty_message_gives_empty_stream() {
        for msg in ["", "    "] {
            let mut s = build(msg, &cfg()).unwrap();
            assert_eq!(s.total_frames(), 0);
            assert!(s.segments().is_empty());
            assert_eq!(s.next(), None);
        }
    }

    #[test]
    fn invalid_character_fails_without_stream() {
        let err = build("CQ\0", &cfg()).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidCharacter { character: '\0', .. }));
    }

    #[test]
    fn bad_config_rejected_before_translation() {
        let bad_gain = SynthConfig::new(1.5, 700.0, 30);
        let zero_wpm = SynthConfig::new(0.5, 700.0, 0);
        let bad_freq = SynthConfig::new(0.5, 0.0, 30);
        for c in [bad_gain, zero_wpm, bad_freq] {
            // untranslatable input must not mask the configuration error
            let err = build("\0", &c).unwrap_err();
            assert!(matches!(err, SynthesisError::InvalidConfiguration { .. }), "{err:?}");
        }
        assert!(build("E", &SynthConfig::new(-0.1, 700.0, 30)).is_err());
        assert!(build("E", &SynthConfig::new(f32::NAN, 700.0, 30)).is_err());
        assert!(build("E", &SynthConfig::new(0.5, 700.0, 1201)).is_err());
        assert!(build_at("E", &cfg(), 0).is_err());
    }

    #[test]
    fn unit_too_short_for_sample_rate_is_rejected() {
        // 1200 wpm → 1 ms, which rounds to 0 frames at 100 Hz
        let c = SynthConfig::new(0.5, 700.0, 1200);
        let err = build_at("E", &c, 100).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidConfiguration { name: "sample_rate", .. }), "{err:?}");
        // still a configuration error for untranslatable input
        assert!(matches!(build_at("\0", &c, 100), Err(SynthesisError::InvalidConfiguration { .. })));
        assert_eq!(build_at("E", &c, 1_000).unwrap().total_frames(), 1);
    }

    #[test]
    fn dash_is_three_dots_at_every_speed() {
        for wpm in 5..=50 {
            let c = SynthConfig::new(0.5, 700.0, wpm);
            for rate in [8_000, 44_100, 48_000] {
                let dot  = build_at("E", &c, rate).unwrap();
                let dash = build_at("T", &c, rate).unwrap();
                assert!(dot.total_frames() > 0);
                assert_eq!(dash.total_frames(), 3 * dot.total_frames(), "{wpm} wpm @ {rate}");
                // I = dot, gap, dot
                let i = build_at("I", &c, rate).unwrap();
                assert_eq!(i.total_frames(), 3 * dot.total_frames());
                // E E = dot, word gap, dot
                let ee = build_at("E E", &c, rate).unwrap();
                assert_eq!(ee.total_frames(), 9 * dot.total_frames());
            }
        }
    }

    #[test]
    fn gain_bounds_are_inclusive() {
        assert!(build("E", &SynthConfig::new(0.0, 700.0, 30)).is_ok());
        assert!(build("E", &SynthConfig::new(1.0, 700.0, 30)).is_ok());
    }

    #[test]
    fn each_build_is_independent() {
        let a: Vec<f32> = build("K", &cfg()).unwrap().collect();
        let b: Vec<f32> = build("K", &cfg()).unwrap().collect();
        assert_eq!(a, b);
    }
}
