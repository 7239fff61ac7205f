//! Fire-and-forget playback of the synthesized effect tones

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use game_core::{SoundBank, SoundEvent, Tone};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

/// Plays a pre-rendered tone once
pub struct ToneSource {
    samples: Arc<[i16]>,
    pos: usize,
    channels: u16,
    sample_rate: u32,
}

impl ToneSource {
    pub fn new(tone: &Tone) -> Self {
        Self {
            samples: Arc::clone(tone.samples()),
            pos: 0,
            channels: tone.channels(),
            sample_rate: tone.sample_rate(),
        }
    }
}

impl Iterator for ToneSource {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        let sample = self.samples.get(self.pos).copied()?;
        self.pos += 1;
        Some(sample)
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.samples.len() - self.pos)
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        let frames = self.samples.len() / self.channels.max(1) as usize;
        Some(Duration::from_secs_f64(
            frames as f64 / f64::from(self.sample_rate),
        ))
    }
}

struct Output {
    // Dropping the stream stops all playback
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
}

/// Audio output, or silence when no device is available.
///
/// Tones are only synthesized once a device has opened.
pub struct Audio {
    output: Option<Output>,
}

impl Audio {
    /// Open the default output device
    pub fn open() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device")?;
        Ok(Self {
            output: Some(Output {
                _stream: stream,
                handle,
                bank: SoundBank::synthesize(),
            }),
        })
    }

    /// Open the default device, falling back to silence on failure
    pub fn open_or_silent() -> Self {
        match Self::open() {
            Ok(audio) => audio,
            Err(err) => {
                warn!("audio disabled: {:#}", err);
                Self::silent()
            }
        }
    }

    pub fn silent() -> Self {
        Self { output: None }
    }

    pub fn is_silent(&self) -> bool {
        self.output.is_none()
    }

    /// Tone that `play` would start for `event`, if any
    pub fn tone(&self, event: SoundEvent) -> Option<&Tone> {
        self.output.as_ref().map(|output| output.bank.get(event))
    }

    /// Start the tone for `event` and return immediately
    pub fn play(&self, event: SoundEvent) {
        let (Some(output), Some(tone)) = (&self.output, self.tone(event)) else {
            return;
        };
        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                sink.append(ToneSource::new(tone));
                sink.detach();
            }
            Err(err) => debug!(?event, "could not play sound: {}", err),
        }
    }
}
