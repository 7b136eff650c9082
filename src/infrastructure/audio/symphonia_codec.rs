use crate::application::ports::{AudioCodec, AudioCodecError};
use crate::domain::Waveform;

use super::audio_decoder::decode_audio;
use super::wav_io::encode_wav;

/// Symphonia for reading uploads, hound for writing segments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioCodec;

impl AudioCodec for SymphoniaAudioCodec {
    fn decode(&self, data: &[u8]) -> Result<Waveform, AudioCodecError> {
        decode_audio(data)
    }

    fn encode_wav(&self, waveform: &Waveform) -> Result<Vec<u8>, AudioCodecError> {
        encode_wav(waveform)
    }
}
