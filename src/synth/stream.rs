// src/synth/stream.rs  —  Segment plan + lazy pull stream over it
use super::generator::{Generator, SineWave};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// A run of `frames` samples, either keyed tone or silence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind:   SegmentKind,
    pub frames: u64,
}

/// Finite mono sample stream. Walks the segment plan once; build a new
/// stream to play the message again.
#[derive(Debug)]
pub struct SampleStream {
    plan:        Vec<Segment>,
    tone:        SineWave,
    sample_rate: u32,
    total:       u64,
    // cursor
    index:       usize,
    offset:      u64,
    consumed:    u64,
}

impl SampleStream {
    pub(crate) fn new(plan: Vec<Segment>, tone: SineWave, sample_rate: u32) -> Self {
        let total = plan.iter().map(|s| s.frames).sum();
        Self { plan, tone, sample_rate, total, index: 0, offset: 0, consumed: 0 }
    }

    /// A stream with no samples at all
    pub fn empty(sample_rate: u32) -> Self {
        Self::new(Vec::new(), SineWave::new(sample_rate, 0.0, 0.0), sample_rate)
    }

    pub fn sample_rate(&self) -> u32 { self.sample_rate }
    pub fn segments(&self) -> &[Segment] { &self.plan }
    pub fn total_frames(&self) -> u64 { self.total }
    pub fn remaining_frames(&self) -> u64 { self.total - self.consumed }

    /// Playing time of the whole stream
    pub fn duration(&self) -> Duration {
        frames_to_duration(self.total, self.sample_rate)
    }

    /// Fill `buf` with the next samples; returns how many were written.
    /// Returns 0 once the stream is exhausted.
    pub fn read(&mut self, buf: &mut [f32]) -> usize {
        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.next() {
                Some(v) => { *slot = v; n += 1; }
                None    => break,
            }
        }
        n
    }
}

impl Iterator for SampleStream {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        loop {
            let seg = *self.plan.get(self.index)?;
            if self.offset < seg.frames {
                if self.offset == 0 && seg.kind == SegmentKind::Tone {
                    self.tone.reset();
                }
                self.offset   += 1;
                self.consumed += 1;
                return Some(match seg.kind {
                    SegmentKind::Tone    => self.tone.next_sample(),
                    SegmentKind::Silence => 0.0,
                });
            }
            self.index += 1;
            self.offset = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining_frames() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SampleStream {}

fn frames_to_duration(frames: u64, sample_rate: u32) -> Duration {
    if sample_rate == 0 {
        return Duration::ZERO;
    }
    let secs  = frames / sample_rate as u64;
    let rem   = frames % sample_rate as u64;
    let nanos = rem * 1_000_000_000 / sample_rate as u64;
    Duration::new(secs, nanos as u32)
}
