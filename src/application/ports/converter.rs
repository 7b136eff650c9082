use std::path::{Path, PathBuf};

use crate::domain::{ConversionParams, Waveform};

/// Files making up one voice model on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub checkpoint: PathBuf,
    pub index: Option<PathBuf>,
}

/// A single inference session. Sessions are bound to one model and used for one
/// file-to-file conversion; they run on a blocking thread.
pub trait Converter: Send {
    fn load(&mut self, model: &ModelPaths) -> Result<(), ConverterError>;

    fn configure(&mut self, params: &ConversionParams);

    fn convert_file(&mut self, input: &Path, output: &Path) -> Result<Waveform, ConverterError>;
}

/// Hands out fresh [`Converter`] sessions.
pub trait InferenceEngine: Send + Sync {
    fn name(&self) -> &str;

    fn new_session(&self) -> Box<dyn Converter>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("model loading failed: {0}")]
    ModelLoad(String),
    #[error("inference failed: {0}")]
    Inference(String),
}
