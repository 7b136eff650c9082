use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use crate::domain::ArtifactName;

/// Body of a stored artifact, read lazily.
pub type ArtifactStream = BoxStream<'static, Result<Bytes, ArtifactStoreError>>;

#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub name: ArtifactName,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// The flat directory holding every uploaded, intermediate and generated file.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn store(
        &self,
        name: &ArtifactName,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ArtifactStoreError>;

    /// Fails with `NotFound` up front; later read errors surface in the stream.
    async fn fetch(&self, name: &ArtifactName) -> Result<ArtifactStream, ArtifactStoreError>;

    async fn delete(&self, name: &ArtifactName) -> Result<(), ArtifactStoreError>;

    async fn list(&self) -> Result<Vec<StoredArtifact>, ArtifactStoreError>;

    /// Filesystem location of `name`, for collaborators that only work on paths.
    fn local_path(&self, name: &ArtifactName) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("listing failed: {0}")]
    ListFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
