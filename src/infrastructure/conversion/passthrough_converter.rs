use std::path::Path;

use crate::application::ports::{Converter, ConverterError, InferenceEngine, ModelPaths};
use crate::domain::{ConversionParams, Waveform};
use crate::infrastructure::audio::wav_io::read_wav_file;

use super::model_check::ensure_model_readable;

/// Copies each segment to its output unchanged. For running the service
/// without an inference backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughEngine;

impl InferenceEngine for PassthroughEngine {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn new_session(&self) -> Box<dyn Converter> {
        Box::new(PassthroughConverter { loaded: false })
    }
}

pub struct PassthroughConverter {
    loaded: bool,
}

impl Converter for PassthroughConverter {
    fn load(&mut self, model: &ModelPaths) -> Result<(), ConverterError> {
        ensure_model_readable(model)?;
        self.loaded = true;
        Ok(())
    }

    fn configure(&mut self, _params: &ConversionParams) {}

    fn convert_file(&mut self, input: &Path, output: &Path) -> Result<Waveform, ConverterError> {
        if !self.loaded {
            return Err(ConverterError::Inference("model not loaded".to_string()));
        }

        std::fs::copy(input, output).map_err(|e| {
            ConverterError::Inference(format!("copy {}: {}", input.display(), e))
        })?;

        read_wav_file(output).map_err(|e| ConverterError::Inference(e.to_string()))
    }
}
