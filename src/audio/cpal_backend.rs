// src/audio/cpal_backend.rs  —  cpal sink pulling a SampleStream (+ optional noise)
use anyhow::{anyhow, bail, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use crate::synth::{Generator, SampleStream, WhiteNoise};
use super::playback::{self, Playback, PlaybackSignal};
use super::{check_noise_gain, AudioOutput};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct SharedState {
    signal: Option<(SampleStream, PlaybackSignal)>,
    noise:  Option<WhiteNoise>,
}

impl SharedState {
    fn next_signal_sample(&mut self) -> f32 {
        if let Some((stream, sig)) = self.signal.as_mut() {
            if !sig.is_cancelled() {
                if let Some(v) = stream.next() {
                    return v;
                }
            }
        } else {
            return 0.0;
        }
        // drained or stopped
        if let Some((_, sig)) = self.signal.take() {
            sig.finish();
        }
        0.0
    }
}

pub struct CpalAudio {
    state:       Arc<Mutex<SharedState>>,
    sample_rate: u32,
    _stream:     Stream,
}

// Stream is !Send on some platforms; wrap it
unsafe impl Send for CpalAudio {}

impl CpalAudio {
    pub fn new() -> Result<Self> {
        let host   = cpal::default_host();
        let device = host.default_output_device()
            .ok_or_else(|| anyhow!("No output device"))?;
        let config = device.default_output_config()?;
        let sample_rate = config.sample_rate().0;
        log::info!(
            "[audio] {} @ {} Hz, {} ch, {:?}",
            device.name().unwrap_or_else(|_| "<unnamed>".into()),
            sample_rate, config.channels(), config.sample_format(),
        );

        let state = Arc::new(Mutex::new(SharedState::default()));

        let st = Arc::clone(&state);
        let stream = match config.sample_format() {
            SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), st)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), st)?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), st)?,
            _                 => return Err(anyhow!("Unsupported sample format")),
        };
        stream.play()?;
        Ok(Self { state, sample_rate, _stream: stream })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SharedState>> {
        self.state.lock().map_err(|_| anyhow!("audio state poisoned"))
    }
}

fn build_stream<S>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    state: Arc<Mutex<SharedState>>,
) -> Result<Stream>
where S: cpal::Sample + cpal::SizedSample + cpal::FromSample<f32>
{
    let ch = config.channels as usize;
    let stream = device.build_output_stream(
        config,
        move |data: &mut [S], _: &cpal::OutputCallbackInfo| {
            let Ok(mut s) = state.lock() else {
                data.fill(S::from_sample(0.0f32));
                return;
            };
            for frame in data.chunks_mut(ch) {
                let mut sample = s.next_signal_sample();
                if let Some(n) = s.noise.as_mut() {
                    sample += n.next_sample();
                }
                let out = S::from_sample(sample.clamp(-1.0, 1.0));
                for smp in frame.iter_mut() { *smp = out; }
            }
        },
        |e| log::error!("Audio error: {e}"),
        None,
    )?;
    Ok(stream)
}

impl AudioOutput for CpalAudio {
    fn sample_rate(&self) -> u32 { self.sample_rate }

    fn play(&mut self, stream: SampleStream) -> Result<Playback> {
        if stream.sample_rate() != self.sample_rate {
            bail!(
                "stream built at {} Hz but device runs at {} Hz",
                stream.sample_rate(), self.sample_rate
            );
        }
        let (pb, sig) = playback::channel();
        let previous = self.lock()?.signal.replace((stream, sig));
        if let Some((_, old)) = previous {
            log::debug!("[audio] cutting off previous message");
            old.finish();
        }
        Ok(pb)
    }

    fn start_noise(&mut self, gain: f32) -> Result<()> {
        check_noise_gain(gain)?;
        self.lock()?.noise = Some(WhiteNoise::new(gain));
        Ok(())
    }

    fn stop_noise(&mut self) {
        if let Ok(mut s) = self.state.lock() {
            s.noise = None;
        }
    }
}
