//! Sine Tone Synthesis
//!
//! Pure-tone sample generation for the tone demo. Playback itself goes
//! through the SDL audio queue; this module only produces samples.

use std::f32::consts::TAU;

/// Mono f32 output rate in Hz
pub const SAMPLE_RATE: u32 = 48_000;

/// Default tone frequency in Hz
pub const TONE_HZ: f32 = 440.0;

/// Samples generated per refill
pub const CHUNK_SAMPLES: usize = 1024;

/// Refill the queue whenever it holds fewer bytes than this — half a second
/// of mono f32 audio
pub const MIN_QUEUED_BYTES: u32 = SAMPLE_RATE * 4 / 2;

/// Incremental sine generator.
///
/// The phase counter wraps at the sample rate to keep the `f32` phase
/// product small; at an integer frequency the wrap lands exactly on a zero
/// crossing, so the tone stays continuous.
pub struct ToneGen {
    freq: f32,
    sample_rate: u32,
    phase: u32,
}

impl ToneGen {
    pub fn new(freq: f32) -> Self {
        Self::with_rate(freq, SAMPLE_RATE)
    }

    pub fn with_rate(freq: f32, sample_rate: u32) -> Self {
        Self {
            freq,
            sample_rate,
            phase: 0,
        }
    }

    pub fn freq(&self) -> f32 {
        self.freq
    }

    /// Next sample in [-1, 1]
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let t = self.phase as f32 * self.freq / self.sample_rate as f32;
        self.phase = (self.phase + 1) % self.sample_rate;
        (t * TAU).sin()
    }

    /// Fill a chunk with consecutive samples
    pub fn fill(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
