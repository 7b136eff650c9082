use vocsplit::application::ports::{ConverterError, InferenceEngine, ModelPaths};
use vocsplit::domain::ConversionParams;
use vocsplit::infrastructure::conversion::PassthroughEngine;

use crate::helpers::{tone_wav, write_file};

#[test]
fn given_loaded_model_when_converting_then_output_matches_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let wav = tone_wav(400, 16_000, 1);
    let input = write_file(dir.path(), "chunk.wav", &wav);
    let output = dir.path().join("cloned.wav");
    let model = ModelPaths {
        checkpoint: write_file(dir.path(), "model.pth", b"weights"),
        index: None,
    };

    let mut session = PassthroughEngine.new_session();
    session.load(&model).unwrap();
    session.configure(&ConversionParams::fixed());
    let waveform = session.convert_file(&input, &output).unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), wav);
    assert_eq!(waveform.duration_ms(), 400);
}

#[test]
fn given_unloaded_session_when_converting_then_inference_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(100, 8_000, 1));

    let mut session = PassthroughEngine.new_session();
    let result = session.convert_file(&input, &dir.path().join("cloned.wav"));

    assert!(matches!(result, Err(ConverterError::Inference(_))));
}
