use super::TimeWindow;

/// Decoded PCM audio: interleaved `f32` samples in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl Waveform {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels: channels.max(1),
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0 || self.sample_rate == 0
    }

    /// Whole milliseconds covered by the clip, rounded down.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }

    /// Copies the frames covered by `window`. Bounds past the end are clamped.
    pub fn slice(&self, window: &TimeWindow) -> Waveform {
        let frames = self.frames();
        let start = self.frame_at(window.start_ms).min(frames);
        let end = self.frame_at(window.end_ms).clamp(start, frames);
        let channels = self.channels as usize;

        Waveform {
            samples: self.samples[start * channels..end * channels].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    fn frame_at(&self, ms: u64) -> usize {
        (ms * self.sample_rate as u64 / 1000) as usize
    }
}
