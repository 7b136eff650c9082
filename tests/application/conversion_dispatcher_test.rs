use std::path::Path;
use std::sync::Arc;

use vocsplit::application::ports::{ConverterError, ModelPaths};
use vocsplit::application::services::{ConversionDispatcher, ConversionJob};
use vocsplit::domain::{ArtifactKind, ArtifactName, ConversionParams, TimeWindow};

use crate::helpers::{RecordingEngine, tone_wav, write_file};

fn jobs(dir: &Path, count: usize) -> Vec<ConversionJob> {
    (0..count)
        .map(|i| {
            let output_name = ArtifactName::generate(ArtifactKind::Cloned, None);
            ConversionJob {
                segment_index: i,
                window: TimeWindow::new(i as u64 * 500, (i as u64 + 1) * 500),
                model: ModelPaths {
                    checkpoint: write_file(dir, &format!("model_{}.pth", i), b"weights"),
                    index: None,
                },
                input: write_file(dir, &format!("chunk_{}.wav", i), &tone_wav(500, 8_000, 1)),
                output: dir.join(output_name.as_str()),
                output_name,
            }
        })
        .collect()
}

#[test]
fn given_jobs_when_all_succeed_then_one_result_per_job_in_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = RecordingEngine::default();
    let dispatcher = ConversionDispatcher::new(Arc::new(engine.clone()), ConversionParams::fixed());
    let jobs = jobs(dir.path(), 3);
    let expected: Vec<_> = jobs.iter().map(|j| j.output_name.clone()).collect();

    let results = dispatcher.dispatch(jobs).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(
        results.iter().map(|r| r.output.clone()).collect::<Vec<_>>(),
        expected
    );
    assert!(results.iter().all(|r| r.output_duration_ms == 500));
    assert_eq!(engine.session_count(), 3);
    for name in &expected {
        assert!(dir.path().join(name.as_str()).exists());
    }
}

#[test]
fn given_jobs_when_dispatching_then_each_session_gets_fixed_params() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = RecordingEngine::default();
    let dispatcher = ConversionDispatcher::new(Arc::new(engine.clone()), ConversionParams::fixed());

    dispatcher.dispatch(jobs(dir.path(), 2)).unwrap();

    let params = engine.params.lock().unwrap();
    assert_eq!(params.len(), 2);
    for p in params.iter() {
        assert_eq!(p.pitch_shift, 0);
        assert_eq!(p.index_rate, 0.75);
        assert_eq!(p.filter_radius, 3);
    }
}

#[test]
fn given_inference_failure_on_second_job_when_dispatching_then_rest_is_aborted() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = RecordingEngine::failing_convert_at(1);
    let dispatcher = ConversionDispatcher::new(Arc::new(engine.clone()), ConversionParams::fixed());
    let jobs = jobs(dir.path(), 3);
    let first_output = jobs[0].output.clone();
    let third_output = jobs[2].output.clone();

    let err = dispatcher.dispatch(jobs).unwrap_err();

    assert_eq!(err.segment_index, 1);
    assert_eq!(err.total, 3);
    assert_eq!(err.completed.len(), 1);
    assert!(matches!(err.source, ConverterError::Inference(_)));
    assert_eq!(engine.session_count(), 2);
    assert!(first_output.exists());
    assert!(!third_output.exists());
}

#[test]
fn given_model_load_failure_when_dispatching_then_no_conversion_runs() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = RecordingEngine::failing_load_at(0);
    let dispatcher = ConversionDispatcher::new(Arc::new(engine.clone()), ConversionParams::fixed());

    let err = dispatcher.dispatch(jobs(dir.path(), 2)).unwrap_err();

    assert_eq!(err.segment_index, 0);
    assert!(matches!(err.source, ConverterError::ModelLoad(_)));
    assert!(err.completed.is_empty());
    assert_eq!(engine.conversion_count(), 0);
    assert_eq!(err.to_string(), "segment 1 of 2: model loading failed: corrupt checkpoint");
}

#[test]
fn given_no_jobs_when_dispatching_then_empty_results() {
    let engine = RecordingEngine::default();
    let dispatcher = ConversionDispatcher::new(Arc::new(engine.clone()), ConversionParams::fixed());

    let results = dispatcher.dispatch(Vec::new()).unwrap();

    assert!(results.is_empty());
    assert_eq!(engine.session_count(), 0);
}
