use multipose_base::{Rect, Vec2};
use multipose_infer::{Keypoint, KeypointIndex, Pose, KEYPOINT_COUNT};

fn numbered_pose() -> Pose {
    Pose {
        score: 0.5,
        bbox: Rect::default(),
        keypoints: std::array::from_fn(|k| Keypoint::new(k as f32, 0.0, 1.0)),
    }
}

#[test]
fn test_keypoint_index_round_trip() {
    for (i, index) in KeypointIndex::ALL.iter().enumerate() {
        assert_eq!(usize::from(*index), i);
        assert_eq!(KeypointIndex::try_from(i), Ok(*index));
    }
}

#[test]
fn test_keypoint_index_out_of_range() {
    assert!(KeypointIndex::try_from(KEYPOINT_COUNT).is_err());
}

#[test]
fn test_named_accessors_match_indices() {
    let pose = numbered_pose();
    assert_eq!(pose.nose().x(), 0.0);
    assert_eq!(pose.left_shoulder().x(), 5.0);
    assert_eq!(pose.right_wrist().x(), 10.0);
    assert_eq!(pose.left_hip().x(), 11.0);
    assert_eq!(pose.right_ankle().x(), 16.0);
    assert_eq!(pose[KeypointIndex::RightKnee].x(), 14.0);
}

#[test]
fn test_pose_iter_is_ordered() {
    let pose = numbered_pose();
    assert_eq!(pose.len(), KEYPOINT_COUNT);
    for (index, keypoint) in pose.iter() {
        assert_eq!(keypoint.x(), usize::from(index) as f32);
    }
}

#[test]
fn test_keypoint_names() {
    assert_eq!(KeypointIndex::Nose.name(), "nose");
    assert_eq!(KeypointIndex::LeftShoulder.name(), "leftShoulder");
    assert_eq!(KeypointIndex::RightAnkle.name(), "rightAnkle");
}

#[test]
fn test_keypoint_new() {
    let kp = Keypoint::new(0.25, 0.75, 0.5);
    assert_eq!(kp.position, Vec2::new(0.25, 0.75));
    assert_eq!(kp.confidence, 0.5);
}
