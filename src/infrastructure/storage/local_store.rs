use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, ArtifactStream, StoredArtifact,
};
use crate::domain::ArtifactName;

/// Artifact directory on local disk. Every artifact lives at the top level.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ArtifactStoreError::Io)?;
        let base_path = std::fs::canonicalize(&base_path).map_err(ArtifactStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store(
        &self,
        name: &ArtifactName,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ArtifactStoreError> {
        let store_path = StorePath::from(name.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(ArtifactStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(ArtifactStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn fetch(&self, name: &ArtifactName) -> Result<ArtifactStream, ArtifactStoreError> {
        let store_path = StorePath::from(name.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ArtifactStoreError::NotFound(name.to_string()),
            other => ArtifactStoreError::DownloadFailed(other.to_string()),
        })?;

        Ok(result
            .into_stream()
            .map_err(|e| ArtifactStoreError::DownloadFailed(e.to_string()))
            .boxed())
    }

    async fn delete(&self, name: &ArtifactName) -> Result<(), ArtifactStoreError> {
        let store_path = StorePath::from(name.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::DeleteFailed(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<StoredArtifact>, ArtifactStoreError> {
        let mut listing = self.inner.list(None);
        let mut artifacts = Vec::new();

        while let Some(entry) = listing.next().await {
            let meta = entry.map_err(|e| ArtifactStoreError::ListFailed(e.to_string()))?;

            // Nested paths, in-flight uploads and foreign files are skipped.
            if meta.location.parts().count() != 1 {
                continue;
            }
            let Some(name) = meta
                .location
                .filename()
                .and_then(|f| ArtifactName::parse(f).ok())
                .filter(|name| name.kind().is_some())
            else {
                continue;
            };

            artifacts.push(StoredArtifact {
                name,
                size: meta.size as u64,
                last_modified: meta.last_modified,
            });
        }

        Ok(artifacts)
    }

    fn local_path(&self, name: &ArtifactName) -> PathBuf {
        self.base_path.join(name.as_str())
    }
}
