mod artifact_kind;
mod artifact_name;
mod audio_segment;
mod conversion_params;
mod conversion_result;
mod segment_plan;
mod time_window;
mod uploaded_file;
mod waveform;

pub use artifact_kind::ArtifactKind;
pub use artifact_name::{ArtifactName, InvalidArtifactName};
pub use audio_segment::AudioSegment;
pub use conversion_params::{ConversionParams, F0Method};
pub use conversion_result::ConversionResult;
pub use segment_plan::SegmentPlan;
pub use time_window::TimeWindow;
pub use uploaded_file::UploadedFile;
pub use waveform::Waveform;
