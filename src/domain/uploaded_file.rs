use bytes::Bytes;

/// A file received in a multipart upload, before it is persisted.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(filename: Option<String>, data: Bytes) -> Self {
        Self { filename, data }
    }

    pub fn extension(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
