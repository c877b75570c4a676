// src/audio/mod.rs  —  AudioOutput sink trait + cpal backend
pub mod playback;

use anyhow::{bail, Result};
use crate::synth::{SampleStream, DEFAULT_SAMPLE_RATE};
use std::time::Duration;

pub use playback::{Playback, PlaybackSignal};

/// Platform-agnostic audio output interface
pub trait AudioOutput: Send {
    /// Rate the sink expects streams to be built at
    fn sample_rate(&self) -> u32;
    /// Start playing a finite sample stream; returns immediately.
    /// A stream already playing is cut off.
    fn play(&mut self, stream: SampleStream) -> Result<Playback>;
    /// Start continuous background noise under the signal
    fn start_noise(&mut self, gain: f32) -> Result<()>;
    fn stop_noise(&mut self);
}

// ── cpal backend ─────────────────────────────────────────────────────────────
#[cfg(feature = "audio-cpal")]
mod cpal_backend;
#[cfg(feature = "audio-cpal")]
pub use cpal_backend::CpalAudio;

/// Noise level accepted by every sink's `start_noise`
pub(crate) fn check_noise_gain(gain: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&gain) {
        bail!("noise gain {gain} out of range 0.0..=1.0");
    }
    Ok(())
}

/// Null backend (no sound — useful for testing / no-audio builds)
pub struct NullAudio;

impl AudioOutput for NullAudio {
    fn sample_rate(&self) -> u32 { DEFAULT_SAMPLE_RATE }

    fn play(&mut self, stream: SampleStream) -> Result<Playback> {
        let (playback, signal) = playback::channel();
        // Just sleep through the stream so timing feels real
        let total = stream.duration();
        std::thread::spawn(move || {
            let tick = Duration::from_millis(10);
            let mut elapsed = Duration::ZERO;
            while elapsed < total && !signal.is_cancelled() {
                let step = tick.min(total - elapsed);
                std::thread::sleep(step);
                elapsed += step;
            }
            signal.finish();
        });
        Ok(playback)
    }

    fn start_noise(&mut self, gain: f32) -> Result<()> { check_noise_gain(gain) }
    fn stop_noise(&mut self) {}
}

/// Factory: returns the best available backend
pub fn create_audio() -> Box<dyn AudioOutput> {
    #[cfg(feature = "audio-cpal")]
    {
        match CpalAudio::new() {
            Ok(a)  => return Box::new(a),
            Err(e) => log::warn!("cpal init failed: {e}  →  using NullAudio"),
        }
    }
    Box::new(NullAudio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{build, SynthConfig};

    #[test]
    fn null_audio_completes() {
        let stream = build("E", &SynthConfig::new(0.5, 700.0, 50)).unwrap();
        let mut out = NullAudio;
        let pb = out.play(stream).unwrap();
        assert!(pb.wait_timeout(Duration::from_secs(5)));
        assert!(pb.is_finished());
    }

    #[test]
    fn null_audio_can_be_stopped() {
        let stream = build("CQ CQ CQ", &SynthConfig::new(0.5, 700.0, 5)).unwrap();
        assert!(stream.duration() > Duration::from_secs(10));
        let mut out = NullAudio;
        let pb = out.play(stream).unwrap();
        pb.stop();
        assert!(pb.wait_timeout(Duration::from_secs(5)));
    }

    #[test]
    fn noise_gain_outside_unit_range_rejected() {
        let mut out = NullAudio;
        for g in [1.5, -0.1, f32::NAN, f32::INFINITY] {
            assert!(out.start_noise(g).is_err(), "{g}");
        }
        for g in [0.0, 0.25, 1.0] {
            out.start_noise(g).unwrap();
        }
        out.stop_noise();
    }

    #[test]
    fn null_audio_empty_stream() {
        let mut out = NullAudio;
        let stream = build("", &SynthConfig::new(0.5, 700.0, 30)).unwrap();
        let pb = out.play(stream).unwrap();
        assert!(pb.wait_timeout(Duration::from_secs(1)));
    }
}
