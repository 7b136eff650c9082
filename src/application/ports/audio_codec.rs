use crate::domain::Waveform;

pub trait AudioCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Waveform, AudioCodecError>;

    fn encode_wav(&self, waveform: &Waveform) -> Result<Vec<u8>, AudioCodecError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCodecError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
}
