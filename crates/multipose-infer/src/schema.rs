//! JSON pose schema used by the hosted MoveNet multipose predictor.
//!
//! Coordinates in the JSON use a top-left origin; [`Pose`] uses bottom-left.

use multipose_base::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::coords::{flip_rect, flip_y};
use crate::pose::{Keypoint, KeypointIndex, Pose, KEYPOINT_COUNT};
use crate::PoseError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PointRecord {
    x: f32,
    y: f32,
    score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RectRecord {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PoseRecord {
    score: f32,
    rect: RectRecord,
    nose: PointRecord,
    left_eye: PointRecord,
    right_eye: PointRecord,
    left_ear: PointRecord,
    right_ear: PointRecord,
    left_shoulder: PointRecord,
    right_shoulder: PointRecord,
    left_elbow: PointRecord,
    right_elbow: PointRecord,
    left_wrist: PointRecord,
    right_wrist: PointRecord,
    left_hip: PointRecord,
    right_hip: PointRecord,
    left_knee: PointRecord,
    right_knee: PointRecord,
    left_ankle: PointRecord,
    right_ankle: PointRecord,
}

impl PoseRecord {
    fn points(&self) -> [&PointRecord; KEYPOINT_COUNT] {
        [
            &self.nose,
            &self.left_eye,
            &self.right_eye,
            &self.left_ear,
            &self.right_ear,
            &self.left_shoulder,
            &self.right_shoulder,
            &self.left_elbow,
            &self.right_elbow,
            &self.left_wrist,
            &self.right_wrist,
            &self.left_hip,
            &self.right_hip,
            &self.left_knee,
            &self.right_knee,
            &self.left_ankle,
            &self.right_ankle,
        ]
    }
}

impl From<&PointRecord> for Keypoint {
    fn from(point: &PointRecord) -> Self {
        Keypoint::new(point.x, flip_y(point.y), point.score)
    }
}

impl From<&Keypoint> for PointRecord {
    fn from(keypoint: &Keypoint) -> Self {
        PointRecord {
            x: keypoint.x(),
            y: flip_y(keypoint.y()),
            score: keypoint.confidence,
        }
    }
}

impl From<&PoseRecord> for Pose {
    fn from(record: &PoseRecord) -> Self {
        let rect = Rect::new(
            Vec2::new(record.rect.x, record.rect.y),
            Vec2::new(record.rect.width, record.rect.height),
        );
        let points = record.points();
        Pose {
            score: record.score,
            bbox: flip_rect(rect),
            keypoints: std::array::from_fn(|k| Keypoint::from(points[k])),
        }
    }
}

impl From<&Pose> for PoseRecord {
    fn from(pose: &Pose) -> Self {
        let rect = flip_rect(pose.bbox);
        let point = |index: KeypointIndex| PointRecord::from(pose.keypoint(index));
        PoseRecord {
            score: pose.score,
            rect: RectRecord {
                x: rect.origin.x,
                y: rect.origin.y,
                width: rect.size.x,
                height: rect.size.y,
            },
            nose: point(KeypointIndex::Nose),
            left_eye: point(KeypointIndex::LeftEye),
            right_eye: point(KeypointIndex::RightEye),
            left_ear: point(KeypointIndex::LeftEar),
            right_ear: point(KeypointIndex::RightEar),
            left_shoulder: point(KeypointIndex::LeftShoulder),
            right_shoulder: point(KeypointIndex::RightShoulder),
            left_elbow: point(KeypointIndex::LeftElbow),
            right_elbow: point(KeypointIndex::RightElbow),
            left_wrist: point(KeypointIndex::LeftWrist),
            right_wrist: point(KeypointIndex::RightWrist),
            left_hip: point(KeypointIndex::LeftHip),
            right_hip: point(KeypointIndex::RightHip),
            left_knee: point(KeypointIndex::LeftKnee),
            right_knee: point(KeypointIndex::RightKnee),
            left_ankle: point(KeypointIndex::LeftAnkle),
            right_ankle: point(KeypointIndex::RightAnkle),
        }
    }
}

/// Parse a JSON array of poses into bottom-up [`Pose`] values.
pub fn poses_from_json(json: &str) -> Result<Vec<Pose>, PoseError> {
    let records: Vec<PoseRecord> = serde_json::from_str(json)
        .map_err(|err| PoseError::InvalidInput(format!("malformed pose json: {err}")))?;
    Ok(records.iter().map(Pose::from).collect())
}

/// Serialize poses as a JSON array in the top-down schema.
pub fn poses_to_json(poses: &[Pose]) -> Result<String, PoseError> {
    let records: Vec<PoseRecord> = poses.iter().map(PoseRecord::from).collect();
    serde_json::to_string(&records)
        .map_err(|err| PoseError::InvalidInput(format!("cannot encode poses: {err}")))
}
