use vocsplit::application::services::{SegmentationError, Segmenter};
use vocsplit::domain::Waveform;

fn silence(duration_ms: u64, sample_rate: u32, channels: u16) -> Waveform {
    let frames = (duration_ms * sample_rate as u64 / 1000) as usize;
    Waveform::new(vec![0.0; frames * channels as usize], sample_rate, channels)
}

#[test]
fn given_any_count_when_segmenting_then_windows_are_equal_contiguous_and_ordered() {
    let segmenter = Segmenter::default();

    for duration_ms in [1_000, 9_000, 10_000, 12_345] {
        let waveform = silence(duration_ms, 8_000, 1);
        for n in 1..=12 {
            let segments = segmenter.segment(&waveform, n).unwrap();
            let width = duration_ms / n as u64;

            assert_eq!(segments.len(), n);
            for (i, segment) in segments.iter().enumerate() {
                assert_eq!(segment.index, i);
                assert_eq!(segment.window.start_ms, i as u64 * width);
                assert_eq!(segment.window.width_ms(), width);
            }
            for pair in segments.windows(2) {
                assert_eq!(pair[0].window.end_ms, pair[1].window.start_ms);
            }

            let covered: u64 = segments.iter().map(|s| s.window.width_ms()).sum();
            assert_eq!(duration_ms - covered, duration_ms - n as u64 * width);
            if duration_ms % n as u64 != 0 {
                assert!(covered < duration_ms);
            }
        }
    }
}

#[test]
fn given_segments_when_sliced_then_each_holds_its_window_of_frames() {
    let waveform = silence(9_000, 16_000, 2);

    let segments = Segmenter::default().segment(&waveform, 3).unwrap();

    for segment in &segments {
        assert_eq!(segment.waveform.frames(), 48_000);
        assert_eq!(segment.waveform.channels(), 2);
        assert_eq!(segment.waveform.duration_ms(), 3_000);
    }
}

#[test]
fn given_ten_seconds_and_three_models_when_planning_then_remainder_is_dropped() {
    let waveform = silence(10_000, 16_000, 1);

    let plan = Segmenter::default().plan(&waveform, 3).unwrap();

    assert_eq!(plan.width_ms(), 3_333);
    assert_eq!(plan.dropped_ms(), 1);
}

#[test]
fn given_second_resolution_when_segmenting_ten_seconds_then_one_second_dropped() {
    let waveform = silence(10_000, 16_000, 1);

    let segmenter = Segmenter::new(1_000);
    let plan = segmenter.plan(&waveform, 3).unwrap();
    let segments = segmenter.split(&waveform, &plan);

    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| s.waveform.duration_ms() == 3_000));
    assert_eq!(plan.dropped_ms(), 1_000);
}

#[test]
fn given_zero_count_when_segmenting_then_invalid_input() {
    let waveform = silence(1_000, 8_000, 1);

    let result = Segmenter::default().segment(&waveform, 0);

    assert!(matches!(result, Err(SegmentationError::InvalidInput(_))));
}

#[test]
fn given_empty_audio_when_segmenting_then_empty_audio_error() {
    let waveform = Waveform::new(Vec::new(), 8_000, 1);

    let result = Segmenter::default().segment(&waveform, 2);

    assert!(matches!(result, Err(SegmentationError::EmptyAudio)));
}

#[test]
fn given_zero_resolution_when_constructing_then_clamped_to_one() {
    assert_eq!(Segmenter::new(0).resolution_ms(), 1);
}
