//! Sine tone synthesis for sound effects
//!
//! Tones are rendered once into 16-bit interleaved stereo buffers and shared
//! read-only afterwards.

use std::f64::consts::TAU;
use std::sync::Arc;
use std::time::Duration;

use crate::params::Params;

/// Things in the game that make a noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    PaddleHit,
    WallHit,
    Score,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 3] = [
        SoundEvent::PaddleHit,
        SoundEvent::WallHit,
        SoundEvent::Score,
    ];

    /// Preset (frequency in Hz, length in ms) for this event
    pub fn preset(self) -> (f32, u32) {
        match self {
            SoundEvent::PaddleHit => (440.0, 70), // A4
            SoundEvent::WallHit => (660.0, 60),   // E5
            SoundEvent::Score => (880.0, 150),    // A5
        }
    }
}

/// A rendered tone: interleaved stereo `i16` samples
#[derive(Debug, Clone)]
pub struct Tone {
    samples: Arc<[i16]>,
    sample_rate: u32,
}

impl Tone {
    pub const CHANNELS: u16 = 2;

    pub fn samples(&self) -> &Arc<[i16]> {
        &self.samples
    }

    /// Number of sample frames (one sample per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / Self::CHANNELS as usize
    }

    pub fn channels(&self) -> u16 {
        Self::CHANNELS
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / f64::from(self.sample_rate))
    }
}

/// Render a sine tone at the standard sample rate
pub fn synthesize_tone(frequency_hz: f32, duration_ms: u32, volume: f32) -> Tone {
    synthesize_tone_at(Params::SAMPLE_RATE, frequency_hz, duration_ms, volume)
}

pub fn synthesize_tone_at(
    sample_rate: u32,
    frequency_hz: f32,
    duration_ms: u32,
    volume: f32,
) -> Tone {
    let rate = f64::from(sample_rate);
    let frames = (rate * f64::from(duration_ms) / 1000.0).round() as usize;
    let amplitude = f64::from(volume.clamp(0.0, 1.0)) * f64::from(i16::MAX);
    let frequency = f64::from(frequency_hz);

    let mut samples = Vec::with_capacity(frames * Tone::CHANNELS as usize);
    for i in 0..frames {
        let t = i as f64 / rate;
        let value = (amplitude * (TAU * frequency * t).sin()).round() as i16;
        // Same signal on both channels
        samples.push(value);
        samples.push(value);
    }

    Tone {
        samples: samples.into(),
        sample_rate,
    }
}

/// The three effect tones, rendered up front
#[derive(Debug, Clone)]
pub struct SoundBank {
    paddle_hit: Tone,
    wall_hit: Tone,
    score: Tone,
}

impl SoundBank {
    pub fn synthesize() -> Self {
        let render = |event: SoundEvent| {
            let (frequency, duration_ms) = event.preset();
            synthesize_tone(frequency, duration_ms, Params::TONE_VOLUME)
        };
        Self {
            paddle_hit: render(SoundEvent::PaddleHit),
            wall_hit: render(SoundEvent::WallHit),
            score: render(SoundEvent::Score),
        }
    }

    pub fn get(&self, event: SoundEvent) -> &Tone {
        match event {
            SoundEvent::PaddleHit => &self.paddle_hit,
            SoundEvent::WallHit => &self.wall_hit,
            SoundEvent::Score => &self.score,
        }
    }
}
