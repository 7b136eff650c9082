use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::application::ports::AudioCodecError;
use crate::domain::Waveform;

/// Writes `waveform` as 16-bit PCM WAV.
pub fn encode_wav(waveform: &Waveform) -> Result<Vec<u8>, AudioCodecError> {
    let spec = WavSpec {
        channels: waveform.channels(),
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| AudioCodecError::EncodingFailed(e.to_string()))?;
        for &sample in waveform.samples() {
            writer
                .write_sample(to_i16(sample))
                .map_err(|e| AudioCodecError::EncodingFailed(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| AudioCodecError::EncodingFailed(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

/// Reads a WAV file of any integer or float sample format.
pub fn read_wav_file(path: &Path) -> Result<Waveform, AudioCodecError> {
    let reader = WavReader::open(path)
        .map_err(|e| AudioCodecError::DecodingFailed(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>(),
        SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()
        }
    }
    .map_err(|e| AudioCodecError::DecodingFailed(format!("{}: {}", path.display(), e)))?;

    Ok(Waveform::new(samples, spec.sample_rate, spec.channels))
}

fn to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}
