use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::{self, BoxStream};

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, ArtifactStream, AudioCodec, ConverterError, ModelPaths,
};
use crate::domain::{
    ArtifactKind, ArtifactName, ConversionResult, InvalidArtifactName, SegmentPlan, TimeWindow,
    UploadedFile,
};

use super::conversion_dispatcher::{ConversionDispatcher, ConversionJob, DispatchError};
use super::segmenter::{SegmentationError, Segmenter};

/// Files received by one `/process` request. `indexes` pair with `models` by
/// position and may be shorter.
#[derive(Debug, Clone, Default)]
pub struct CloneRequest {
    pub audio: Option<UploadedFile>,
    pub models: Vec<UploadedFile>,
    pub indexes: Vec<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct CloneOutcome {
    pub input: ArtifactName,
    pub plan: SegmentPlan,
    pub results: Vec<ConversionResult>,
}

impl CloneOutcome {
    pub fn output_filenames(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.output.as_str()).collect()
    }
}

struct EncodedSegment {
    index: usize,
    window: TimeWindow,
    wav: Vec<u8>,
}

pub struct VoiceCloneService {
    store: Arc<dyn ArtifactStore>,
    codec: Arc<dyn AudioCodec>,
    dispatcher: Arc<ConversionDispatcher>,
    segmenter: Segmenter,
}

impl VoiceCloneService {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        codec: Arc<dyn AudioCodec>,
        dispatcher: Arc<ConversionDispatcher>,
        segmenter: Segmenter,
    ) -> Self {
        Self {
            store,
            codec,
            dispatcher,
            segmenter,
        }
    }

    pub fn engine_name(&self) -> &str {
        self.dispatcher.engine_name()
    }

    /// Persists the upload, cuts one segment per model and converts each
    /// segment with its model, in upload order.
    #[tracing::instrument(skip(self, request), fields(models = request.models.len()))]
    pub async fn process(&self, request: CloneRequest) -> Result<CloneOutcome, CloneError> {
        let CloneRequest {
            audio,
            models,
            indexes,
        } = request;

        let audio = audio
            .filter(|a| !a.is_empty())
            .ok_or(CloneError::MissingInput)?;
        if models.is_empty() {
            return Err(CloneError::MissingInput);
        }

        let input_name = ArtifactName::generate(ArtifactKind::Input, audio.extension());
        self.persist(&input_name, audio.data.clone()).await?;
        tracing::debug!(input = %input_name, bytes = audio.len(), "Input audio stored");

        let (plan, segments) = self.cut_segments(audio.data, models.len()).await?;

        let mut indexes = indexes.into_iter();
        let mut jobs = Vec::with_capacity(models.len());

        for (model, segment) in models.into_iter().zip(segments) {
            let checkpoint = ArtifactName::generate(ArtifactKind::Model, model.extension());
            self.persist(&checkpoint, model.data).await?;

            let index = match indexes.next().filter(|i| !i.is_empty()) {
                Some(file) => {
                    let name = ArtifactName::generate(ArtifactKind::Index, file.extension());
                    self.persist(&name, file.data).await?;
                    Some(name)
                }
                None => None,
            };

            let chunk = ArtifactName::generate(ArtifactKind::Chunk, None);
            self.persist(&chunk, Bytes::from(segment.wav)).await?;

            let output_name = ArtifactName::generate(ArtifactKind::Cloned, None);

            jobs.push(ConversionJob {
                segment_index: segment.index,
                window: segment.window,
                model: ModelPaths {
                    checkpoint: self.store.local_path(&checkpoint),
                    index: index.as_ref().map(|name| self.store.local_path(name)),
                },
                input: self.store.local_path(&chunk),
                output: self.store.local_path(&output_name),
                output_name,
            });
        }

        let dispatcher = Arc::clone(&self.dispatcher);
        let results = tokio::task::spawn_blocking(move || dispatcher.dispatch(jobs))
            .await
            .map_err(|e| CloneError::Worker(e.to_string()))?
            .map_err(|e| {
                tracing::warn!(
                    completed = ?e.completed.iter().map(|r| r.output.as_str()).collect::<Vec<_>>(),
                    "Conversion aborted; earlier outputs remain on disk"
                );
                CloneError::from(e)
            })?;

        tracing::info!(
            input = %input_name,
            outputs = results.len(),
            dropped_ms = plan.dropped_ms(),
            "Voice conversion completed"
        );

        Ok(CloneOutcome {
            input: input_name,
            plan,
            results,
        })
    }

    /// Opens a converted clip for streaming. Only `cloned_` artifacts are served.
    #[tracing::instrument(skip(self))]
    pub async fn download(&self, filename: &str) -> Result<ArtifactStream, CloneError> {
        let name = ArtifactName::parse(filename)?;
        if name.kind() != Some(ArtifactKind::Cloned) {
            return Err(CloneError::NotFound(filename.to_string()));
        }

        self.store.fetch(&name).await.map_err(|e| match e {
            ArtifactStoreError::NotFound(_) => CloneError::NotFound(filename.to_string()),
            other => CloneError::Storage(other),
        })
    }

    async fn cut_segments(
        &self,
        data: Bytes,
        count: usize,
    ) -> Result<(SegmentPlan, Vec<EncodedSegment>), CloneError> {
        let codec = Arc::clone(&self.codec);
        let segmenter = self.segmenter;

        let cut = tokio::task::spawn_blocking(
            move || -> Result<(SegmentPlan, Vec<EncodedSegment>), SegmentationError> {
                let waveform = codec
                    .decode(&data)
                    .map_err(|e| SegmentationError::Unreadable(e.to_string()))?;

                let plan = segmenter.plan(&waveform, count)?;
                if plan.width_ms() == 0 {
                    return Err(SegmentationError::TooShort {
                        duration_ms: plan.total_ms(),
                        count,
                    });
                }

                let encoded = segmenter
                    .split(&waveform, &plan)
                    .into_iter()
                    .map(|segment| {
                        codec
                            .encode_wav(&segment.waveform)
                            .map(|wav| EncodedSegment {
                                index: segment.index,
                                window: segment.window,
                                wav,
                            })
                            .map_err(|e| SegmentationError::Export(e.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                tracing::debug!(
                    sample_rate = waveform.sample_rate(),
                    channels = waveform.channels(),
                    duration_ms = plan.total_ms(),
                    width_ms = plan.width_ms(),
                    dropped_ms = plan.dropped_ms(),
                    "Audio segmented"
                );

                Ok((plan, encoded))
            },
        );

        Ok(cut.await.map_err(|e| CloneError::Worker(e.to_string()))??)
    }

    async fn persist(&self, name: &ArtifactName, data: Bytes) -> Result<u64, CloneError> {
        let body: BoxStream<'static, Result<Bytes, io::Error>> =
            Box::pin(stream::once(async move { Ok(data) }));
        Ok(self.store.store(name, body).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("Missing audio or model files")]
    MissingInput,
    #[error(transparent)]
    InvalidArtifactName(#[from] InvalidArtifactName),
    #[error("segmentation: {0}")]
    Segmentation(#[from] SegmentationError),
    #[error("model loading failed on segment {} of {total}: {message}", .segment + 1)]
    ModelLoad {
        segment: usize,
        total: usize,
        message: String,
    },
    #[error("inference failed on segment {} of {total}: {message}", .segment + 1)]
    Inference {
        segment: usize,
        total: usize,
        message: String,
    },
    #[error("storage: {0}")]
    Storage(#[from] ArtifactStoreError),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("worker task failed: {0}")]
    Worker(String),
}

impl CloneError {
    /// Stable identifier for the error kind, exposed to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            CloneError::MissingInput => "missing_input",
            CloneError::InvalidArtifactName(_) => "invalid_filename",
            CloneError::Segmentation(_) => "segmentation",
            CloneError::ModelLoad { .. } => "model_load",
            CloneError::Inference { .. } => "inference",
            CloneError::Storage(_) => "storage",
            CloneError::NotFound(_) => "not_found",
            CloneError::Worker(_) => "internal",
        }
    }
}

impl From<DispatchError> for CloneError {
    fn from(e: DispatchError) -> Self {
        match e.source {
            ConverterError::ModelLoad(message) => CloneError::ModelLoad {
                segment: e.segment_index,
                total: e.total,
                message,
            },
            ConverterError::Inference(message) => CloneError::Inference {
                segment: e.segment_index,
                total: e.total,
                message,
            },
        }
    }
}
