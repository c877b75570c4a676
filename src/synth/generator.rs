// src/synth/generator.rs  —  Primitive sample producers (sine tone, white noise)
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Infinite mono sample source
pub trait Generator: Send {
    fn next_sample(&mut self) -> f32;
    /// Restart from the beginning of the waveform
    fn reset(&mut self) {}
}

/// Sine tone at a fixed pitch and amplitude
#[derive(Debug, Clone)]
pub struct SineWave {
    frequency:   f32,
    gain:        f32,
    sample_rate: f32,
    phase:       f32,  // 0..1
}

impl SineWave {
    pub fn new(sample_rate: u32, frequency: f32, gain: f32) -> Self {
        Self { frequency, gain, sample_rate: sample_rate as f32, phase: 0.0 }
    }
}

impl Generator for SineWave {
    fn next_sample(&mut self) -> f32 {
        let v = (self.phase * 2.0 * PI).sin() * self.gain;
        self.phase = (self.phase + self.frequency / self.sample_rate) % 1.0;
        v
    }

    fn reset(&mut self) { self.phase = 0.0; }
}

/// Uniform white noise in [-gain, gain]
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    gain: f32,
    rng:  SmallRng,
}

impl WhiteNoise {
    pub fn new(gain: f32) -> Self {
        Self { gain, rng: SmallRng::from_entropy() }
    }

    #[cfg(test)]
    fn seeded(gain: f32, seed: u64) -> Self {
        Self { gain, rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Generator for WhiteNoise {
    fn next_sample(&mut self) -> f32 {
        if self.gain == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-1.0f32..=1.0) * self.gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_starts_at_zero_and_stays_within_gain() {
        let mut s = SineWave::new(44_100, 700.0, 0.5);
        assert_eq!(s.next_sample(), 0.0);
        for _ in 0..44_100 {
            let v = s.next_sample();
            assert!(v.abs() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn sine_quarter_period_peaks() {
        // 1 kHz at 4 kHz: samples 0, +g, 0, -g
        let mut s = SineWave::new(4_000, 1_000.0, 0.8);
        let v: Vec<f32> = (0..4).map(|_| s.next_sample()).collect();
        assert!(v[0].abs() < 1e-5);
        assert!((v[1] - 0.8).abs() < 1e-5);
        assert!(v[2].abs() < 1e-5);
        assert!((v[3] + 0.8).abs() < 1e-5);
    }

    #[test]
    fn sine_reset_restarts_phase() {
        let mut s = SineWave::new(44_100, 700.0, 1.0);
        let first: Vec<f32> = (0..32).map(|_| s.next_sample()).collect();
        s.reset();
        let again: Vec<f32> = (0..32).map(|_| s.next_sample()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn noise_is_bounded_and_not_constant() {
        let mut n = WhiteNoise::seeded(0.1, 42);
        let v: Vec<f32> = (0..1000).map(|_| n.next_sample()).collect();
        assert!(v.iter().all(|x| x.abs() <= 0.1));
        assert!(v.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn silent_noise() {
        let mut n = WhiteNoise::seeded(0.0, 1);
        assert!((0..100).all(|_| n.next_sample() == 0.0));
    }
}
