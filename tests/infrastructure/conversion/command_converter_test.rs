use std::path::Path;

use vocsplit::application::ports::{ConverterError, InferenceEngine, ModelPaths};
use vocsplit::domain::ConversionParams;
use vocsplit::infrastructure::conversion::CommandEngine;

use crate::helpers::{tone_wav, write_file};

fn model_in(dir: &Path) -> ModelPaths {
    ModelPaths {
        checkpoint: write_file(dir, "model.pth", b"weights"),
        index: None,
    }
}

fn shell_engine(script: &str, extra: &[&str]) -> CommandEngine {
    let mut args = vec!["-c".to_string(), script.to_string()];
    args.extend(extra.iter().map(|a| a.to_string()));
    CommandEngine::new("sh", args)
}

#[cfg(unix)]
#[test]
fn given_successful_command_when_converting_then_output_is_read_back() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(750, 8_000, 1));
    let output = dir.path().join("cloned.wav");
    let engine = shell_engine(r#"cp "$0" "$1""#, &["{input}", "{output}"]);

    let mut session = engine.new_session();
    session.load(&model_in(dir.path())).unwrap();
    session.configure(&ConversionParams::fixed());
    let waveform = session.convert_file(&input, &output).unwrap();

    assert!(output.exists());
    assert_eq!(waveform.duration_ms(), 750);
}

#[cfg(unix)]
#[test]
fn given_configured_params_when_converting_then_placeholders_are_substituted() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(100, 8_000, 1));
    let output = dir.path().join("cloned.wav");
    let engine = shell_engine(
        r#"test "$2" = "0 0.75 harvest" && cp "$0" "$1""#,
        &["{input}", "{output}", "{pitch} {index_rate} {f0_method}"],
    );

    let mut session = engine.new_session();
    session.load(&model_in(dir.path())).unwrap();
    session.configure(&ConversionParams::fixed());

    assert!(session.convert_file(&input, &output).is_ok());
}

#[cfg(unix)]
#[test]
fn given_failing_command_when_converting_then_inference_error_carries_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(100, 8_000, 1));
    let engine = shell_engine("echo 'cuda out of memory' >&2; exit 3", &[]);

    let mut session = engine.new_session();
    session.load(&model_in(dir.path())).unwrap();
    let result = session.convert_file(&input, &dir.path().join("cloned.wav"));

    match result {
        Err(ConverterError::Inference(message)) => {
            assert!(message.contains("cuda out of memory"));
        }
        other => panic!("expected inference error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn given_missing_program_when_converting_then_inference_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(100, 8_000, 1));
    let engine = CommandEngine::new("vocsplit-no-such-binary", Vec::new());

    let mut session = engine.new_session();
    session.load(&model_in(dir.path())).unwrap();
    let result = session.convert_file(&input, &dir.path().join("cloned.wav"));

    assert!(matches!(result, Err(ConverterError::Inference(_))));
}

#[test]
fn given_no_loaded_model_when_converting_then_inference_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_file(dir.path(), "chunk.wav", &tone_wav(100, 8_000, 1));
    let engine = CommandEngine::new("sh", Vec::new());

    let mut session = engine.new_session();
    let result = session.convert_file(&input, &dir.path().join("cloned.wav"));

    assert!(matches!(result, Err(ConverterError::Inference(_))));
}

#[test]
fn given_missing_or_empty_model_when_loading_then_model_load_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = CommandEngine::new("sh", Vec::new());

    let missing = ModelPaths {
        checkpoint: dir.path().join("absent.pth"),
        index: None,
    };
    let empty_index = ModelPaths {
        checkpoint: write_file(dir.path(), "model.pth", b"weights"),
        index: Some(write_file(dir.path(), "model.index", b"")),
    };

    assert!(matches!(
        engine.new_session().load(&missing),
        Err(ConverterError::ModelLoad(_))
    ));
    assert!(matches!(
        engine.new_session().load(&empty_index),
        Err(ConverterError::ModelLoad(_))
    ));
}
