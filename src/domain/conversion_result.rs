use super::{ArtifactName, TimeWindow};

/// One converted clip, produced from segment `segment_index` with the model at
/// the same position in the upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub segment_index: usize,
    pub window: TimeWindow,
    pub output: ArtifactName,
    pub output_duration_ms: u64,
}
