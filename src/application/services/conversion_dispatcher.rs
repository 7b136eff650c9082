use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ConverterError, InferenceEngine, ModelPaths};
use crate::domain::{ArtifactName, ConversionParams, ConversionResult, TimeWindow};

/// Everything needed to convert one segment with one model.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub segment_index: usize,
    pub window: TimeWindow,
    pub model: ModelPaths,
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_name: ArtifactName,
}

/// Runs conversion jobs one after another, each in a fresh engine session.
///
/// Blocking; call it from `spawn_blocking`.
pub struct ConversionDispatcher {
    engine: Arc<dyn InferenceEngine>,
    params: ConversionParams,
}

impl ConversionDispatcher {
    pub fn new(engine: Arc<dyn InferenceEngine>, params: ConversionParams) -> Self {
        Self { engine, params }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Stops at the first failing job. Outputs written before the failure stay
    /// on disk and are listed in [`DispatchError::completed`].
    pub fn dispatch(&self, jobs: Vec<ConversionJob>) -> Result<Vec<ConversionResult>, DispatchError> {
        let total = jobs.len();
        let mut completed = Vec::with_capacity(total);

        for job in jobs {
            let span = tracing::info_span!(
                "conversion",
                engine = self.engine.name(),
                segment = job.segment_index,
                window = %job.window,
            );
            let _guard = span.enter();

            match self.run_one(&job) {
                Ok(result) => {
                    tracing::info!(
                        output = %result.output,
                        output_duration_ms = result.output_duration_ms,
                        "Segment converted"
                    );
                    completed.push(result);
                }
                Err(source) => {
                    tracing::error!(error = %source, "Segment conversion failed");
                    return Err(DispatchError {
                        segment_index: job.segment_index,
                        total,
                        completed,
                        source,
                    });
                }
            }
        }

        Ok(completed)
    }

    fn run_one(&self, job: &ConversionJob) -> Result<ConversionResult, ConverterError> {
        let mut converter = self.engine.new_session();
        converter.load(&job.model)?;
        converter.configure(&self.params);
        let converted = converter.convert_file(&job.input, &job.output)?;

        Ok(ConversionResult {
            segment_index: job.segment_index,
            window: job.window,
            output: job.output_name.clone(),
            output_duration_ms: converted.duration_ms(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("segment {} of {total}: {source}", .segment_index + 1)]
pub struct DispatchError {
    pub segment_index: usize,
    pub total: usize,
    pub completed: Vec<ConversionResult>,
    #[source]
    pub source: ConverterError,
}
