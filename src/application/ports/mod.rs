mod artifact_store;
mod audio_codec;
mod converter;

pub use artifact_store::{ArtifactStore, ArtifactStoreError, ArtifactStream, StoredArtifact};
pub use audio_codec::{AudioCodec, AudioCodecError};
pub use converter::{Converter, ConverterError, InferenceEngine, ModelPaths};
