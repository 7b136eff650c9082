use crate::domain::{AudioSegment, SegmentPlan, Waveform};

/// Splits a clip into one equal-width segment per model.
///
/// Durations are counted in steps of `resolution_ms`; the default of 1 gives
/// millisecond windows. The tail that does not fill a whole window is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    resolution_ms: u64,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self { resolution_ms: 1 }
    }
}

impl Segmenter {
    pub fn new(resolution_ms: u64) -> Self {
        Self {
            resolution_ms: resolution_ms.max(1),
        }
    }

    pub fn resolution_ms(&self) -> u64 {
        self.resolution_ms
    }

    pub fn plan(&self, waveform: &Waveform, count: usize) -> Result<SegmentPlan, SegmentationError> {
        if count == 0 {
            return Err(SegmentationError::InvalidInput(
                "segment count must be at least 1".to_string(),
            ));
        }
        if waveform.is_empty() {
            return Err(SegmentationError::EmptyAudio);
        }

        SegmentPlan::new(waveform.duration_ms(), count, self.resolution_ms).ok_or_else(|| {
            SegmentationError::InvalidInput("segment count must be at least 1".to_string())
        })
    }

    pub fn split(&self, waveform: &Waveform, plan: &SegmentPlan) -> Vec<AudioSegment> {
        plan.windows()
            .iter()
            .enumerate()
            .map(|(index, window)| AudioSegment {
                index,
                window: *window,
                waveform: waveform.slice(window),
            })
            .collect()
    }

    pub fn segment(
        &self,
        waveform: &Waveform,
        count: usize,
    ) -> Result<Vec<AudioSegment>, SegmentationError> {
        let plan = self.plan(waveform, count)?;

        tracing::debug!(
            count = plan.count(),
            width_ms = plan.width_ms(),
            dropped_ms = plan.dropped_ms(),
            "Audio segmented"
        );

        Ok(self.split(waveform, &plan))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SegmentationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("audio contains no samples")]
    EmptyAudio,
    #[error("audio of {duration_ms}ms is too short for {count} segments")]
    TooShort { duration_ms: u64, count: usize },
    #[error("audio is unreadable: {0}")]
    Unreadable(String),
    #[error("segment export failed: {0}")]
    Export(String),
}
