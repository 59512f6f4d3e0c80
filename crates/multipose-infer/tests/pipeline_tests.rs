use multipose_base::Tensor;
use multipose_infer::{
    process_frame, FilterConfig, PipelineConfig, PoseError, PosePipeline, TrackingSession,
    MOVENET_FIELDS,
};

/// `[1, N, 56]` tensor where every candidate has the given score and every
/// keypoint sits at (y, x) with confidence 0.9
fn raw_tensor(scores: &[f32], y: f32, x: f32) -> Tensor<f32> {
    let mut data = vec![0.0; scores.len() * MOVENET_FIELDS];
    for (i, &score) in scores.iter().enumerate() {
        let block = &mut data[i * MOVENET_FIELDS..(i + 1) * MOVENET_FIELDS];
        for k in 0..17 {
            block[3 * k] = y;
            block[3 * k + 1] = x;
            block[3 * k + 2] = 0.9;
        }
        block[51..55].copy_from_slice(&[y, x, y, x]);
        block[55] = score;
    }
    Tensor::new(vec![1, scores.len(), MOVENET_FIELDS], data).unwrap()
}

#[test]
fn test_process_frame_end_to_end() {
    let mut data = vec![0.0; MOVENET_FIELDS];
    data[0] = 0.1;
    data[1] = 0.5;
    data[2] = 0.9;
    data[55] = 0.8;
    let raw = Tensor::new(vec![1, 1, MOVENET_FIELDS], data).unwrap();

    let mut session = TrackingSession::default();
    let poses = process_frame(&raw, &mut session, 0.3, false).unwrap();
    assert_eq!(poses.len(), 1);
    assert!((poses[0].nose().y() - 0.9).abs() < 1e-6);
    assert_eq!(poses[0].nose().x(), 0.5);
    assert_eq!(poses[0].score, 0.8);
}

#[test]
fn test_process_frame_below_threshold() {
    let raw = raw_tensor(&[0.2], 0.1, 0.5);
    let mut session = TrackingSession::default();
    let poses = process_frame(&raw, &mut session, 0.3, true).unwrap();
    assert!(poses.is_empty());
    assert_eq!(session.frames(), 1);
}

#[test]
fn test_smoothing_disabled_leaves_session_untouched() {
    let mut session = TrackingSession::default();
    process_frame(&raw_tensor(&[0.9], 0.1, 0.5), &mut session, 0.3, false).unwrap();
    assert_eq!(session.filter_bank().active_channels(), 0);
}

#[test]
fn test_smoothing_across_frames() {
    let mut session = TrackingSession::new(FilterConfig::default().with_beta(0.0));
    let first = process_frame(&raw_tensor(&[0.9], 0.5, 0.0), &mut session, 0.3, true).unwrap();
    assert_eq!(first[0].nose().x(), 0.0);

    let second = process_frame(&raw_tensor(&[0.9], 0.5, 1.0), &mut session, 0.3, true).unwrap();
    let x = second[0].nose().x();
    assert!(x > 0.0 && x < 1.0, "expected smoothed x, got {}", x);
    // Score is not smoothed
    assert_eq!(second[0].score, 0.9);
}

#[test]
fn test_smoothing_keeps_score_threshold_on_raw_score() {
    let mut session = TrackingSession::default();
    process_frame(&raw_tensor(&[0.9], 0.5, 0.5), &mut session, 0.3, true).unwrap();
    // A sudden drop in score is not masked by smoothing
    let poses = process_frame(&raw_tensor(&[0.1], 0.5, 0.5), &mut session, 0.3, true).unwrap();
    assert!(poses.is_empty());
}

#[test]
fn test_deterministic_given_same_state() {
    let frames = [
        raw_tensor(&[0.9, 0.5], 0.2, 0.3),
        raw_tensor(&[0.9, 0.5], 0.25, 0.35),
        raw_tensor(&[0.9, 0.5], 0.3, 0.3),
    ];
    let mut a = TrackingSession::default();
    let mut b = TrackingSession::default();
    for raw in &frames {
        let pa = process_frame(raw, &mut a, 0.3, true).unwrap();
        let pb = process_frame(raw, &mut b, 0.3, true).unwrap();
        assert_eq!(pa, pb);
    }
}

#[test]
fn test_wrong_rank_is_shape_mismatch() {
    let raw = Tensor::new(vec![1, MOVENET_FIELDS], vec![0.0; MOVENET_FIELDS]).unwrap();
    let mut session = TrackingSession::default();
    let result = process_frame(&raw, &mut session, 0.3, true);
    assert!(matches!(result, Err(PoseError::ShapeMismatch { .. })));
}

#[test]
fn test_batch_dimension_must_be_one() {
    let raw = Tensor::new(vec![2, 1, MOVENET_FIELDS], vec![0.0; 2 * MOVENET_FIELDS]).unwrap();
    let mut session = TrackingSession::default();
    let result = process_frame(&raw, &mut session, 0.3, true);
    assert!(matches!(result, Err(PoseError::ShapeMismatch { .. })));
    assert_eq!(session.frames(), 0);
}

#[test]
fn test_narrow_fields_rejected_before_filtering() {
    let raw = Tensor::new(vec![1, 2, 20], vec![0.0; 40]).unwrap();
    let mut session = TrackingSession::default();
    let result = process_frame(&raw, &mut session, 0.3, true);
    assert!(matches!(result, Err(PoseError::ShapeMismatch { .. })));
    assert_eq!(session.filter_bank().active_channels(), 0);
}

#[test]
fn test_session_reset() {
    let mut session = TrackingSession::default();
    process_frame(&raw_tensor(&[0.9], 0.5, 0.0), &mut session, 0.3, true).unwrap();
    session.reset();
    assert_eq!(session.frames(), 0);
    assert_eq!(session.filter_bank().active_channels(), 0);

    let poses = process_frame(&raw_tensor(&[0.9], 0.5, 1.0), &mut session, 0.3, true).unwrap();
    assert_eq!(poses[0].nose().x(), 1.0);
}

#[test]
fn test_pipeline_defaults() {
    let pipeline = PosePipeline::default();
    assert_eq!(pipeline.config().min_score(), 0.3);
    assert!(pipeline.config().smoothing());
    assert!(!pipeline.config().sort_by_score());
}

#[test]
fn test_pipeline_process_and_reset() {
    let mut pipeline = PosePipeline::default();
    pipeline.process(&raw_tensor(&[0.9], 0.5, 0.0)).unwrap();
    let smoothed = pipeline.process(&raw_tensor(&[0.9], 0.5, 1.0)).unwrap();
    assert!(smoothed[0].nose().x() < 1.0);
    assert_eq!(pipeline.session().frames(), 2);

    pipeline.reset_session();
    let fresh = pipeline.process(&raw_tensor(&[0.9], 0.5, 1.0)).unwrap();
    assert_eq!(fresh[0].nose().x(), 1.0);
}

#[test]
fn test_pipeline_without_smoothing() {
    let config = PipelineConfig::default().with_smoothing(false);
    let mut pipeline = PosePipeline::new(config).unwrap();
    pipeline.process(&raw_tensor(&[0.9], 0.5, 0.0)).unwrap();
    let poses = pipeline.process(&raw_tensor(&[0.9], 0.5, 1.0)).unwrap();
    assert_eq!(poses[0].nose().x(), 1.0);
}

#[test]
fn test_pipeline_sort_by_score() {
    let config = PipelineConfig::default()
        .with_smoothing(false)
        .with_sort_by_score(true);
    let mut pipeline = PosePipeline::new(config).unwrap();
    let poses = pipeline.process(&raw_tensor(&[0.4, 0.95, 0.1, 0.6], 0.5, 0.5)).unwrap();
    let scores: Vec<f32> = poses.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![0.95, 0.6, 0.4]);
}

#[test]
fn test_pipeline_process_at() {
    let mut pipeline = PosePipeline::default();
    pipeline.process_at(&raw_tensor(&[0.9], 0.5, 0.0), 0.0).unwrap();
    let poses = pipeline.process_at(&raw_tensor(&[0.9], 0.5, 1.0), 1.0 / 30.0).unwrap();
    let x = poses[0].nose().x();
    assert!(x > 0.0 && x < 1.0);
}

#[test]
fn test_predict_requires_single_input() {
    let mut pipeline = PosePipeline::default();
    let raw = raw_tensor(&[0.9], 0.5, 0.5);

    assert!(matches!(pipeline.predict(&[]), Err(PoseError::InvalidInput(_))));
    assert!(matches!(
        pipeline.predict(&[&raw, &raw]),
        Err(PoseError::InvalidInput(_))
    ));
    assert_eq!(pipeline.predict(&[&raw]).unwrap().len(), 1);
}

#[test]
fn test_pipeline_rejects_invalid_config() {
    let config = PipelineConfig::default().with_min_score(1.5);
    assert!(matches!(PosePipeline::new(config), Err(PoseError::Config(_))));
}
