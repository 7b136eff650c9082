mod conversion_dispatcher;
mod retention_sweeper;
mod segmenter;
mod voice_clone_service;

pub use conversion_dispatcher::{ConversionDispatcher, ConversionJob, DispatchError};
pub use retention_sweeper::RetentionSweeper;
pub use segmenter::{SegmentationError, Segmenter};
pub use voice_clone_service::{CloneError, CloneOutcome, CloneRequest, VoiceCloneService};
