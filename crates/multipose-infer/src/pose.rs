use multipose_base::{Rect, Vec2};

/// Number of keypoints in a MoveNet pose
pub const KEYPOINT_COUNT: usize = 17;

/// A single keypoint with normalized 2D position and confidence score
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keypoint {
    /// Normalized position in [0, 1], origin bottom-left.
    pub position: Vec2<f32>,
    /// Confidence in [0, 1] as emitted by the model; not re-clamped.
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            confidence,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Anatomical keypoint indices, in model output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointIndex {
    pub const ALL: [KeypointIndex; KEYPOINT_COUNT] = [
        KeypointIndex::Nose,
        KeypointIndex::LeftEye,
        KeypointIndex::RightEye,
        KeypointIndex::LeftEar,
        KeypointIndex::RightEar,
        KeypointIndex::LeftShoulder,
        KeypointIndex::RightShoulder,
        KeypointIndex::LeftElbow,
        KeypointIndex::RightElbow,
        KeypointIndex::LeftWrist,
        KeypointIndex::RightWrist,
        KeypointIndex::LeftHip,
        KeypointIndex::RightHip,
        KeypointIndex::LeftKnee,
        KeypointIndex::RightKnee,
        KeypointIndex::LeftAnkle,
        KeypointIndex::RightAnkle,
    ];

    /// camelCase name used by the JSON pose schema
    pub fn name(self) -> &'static str {
        match self {
            KeypointIndex::Nose => "nose",
            KeypointIndex::LeftEye => "leftEye",
            KeypointIndex::RightEye => "rightEye",
            KeypointIndex::LeftEar => "leftEar",
            KeypointIndex::RightEar => "rightEar",
            KeypointIndex::LeftShoulder => "leftShoulder",
            KeypointIndex::RightShoulder => "rightShoulder",
            KeypointIndex::LeftElbow => "leftElbow",
            KeypointIndex::RightElbow => "rightElbow",
            KeypointIndex::LeftWrist => "leftWrist",
            KeypointIndex::RightWrist => "rightWrist",
            KeypointIndex::LeftHip => "leftHip",
            KeypointIndex::RightHip => "rightHip",
            KeypointIndex::LeftKnee => "leftKnee",
            KeypointIndex::RightKnee => "rightKnee",
            KeypointIndex::LeftAnkle => "leftAnkle",
            KeypointIndex::RightAnkle => "rightAnkle",
        }
    }
}

impl From<KeypointIndex> for usize {
    fn from(index: KeypointIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for KeypointIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        KeypointIndex::ALL.get(value).copied().ok_or_else(|| {
            format!("Invalid keypoint index: {}. Must be in range 0-16.", value)
        })
    }
}

/// One detected person
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Overall pose score, as emitted by the model.
    pub score: f32,
    /// Normalized bounding box, origin bottom-left.
    pub bbox: Rect<f32>,
    pub keypoints: [Keypoint; KEYPOINT_COUNT],
}

impl Pose {
    /// Get a keypoint by its anatomical index
    pub fn keypoint(&self, index: KeypointIndex) -> &Keypoint {
        &self.keypoints[usize::from(index)]
    }

    /// Always [`KEYPOINT_COUNT`].
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeypointIndex, &Keypoint)> {
        KeypointIndex::ALL.into_iter().zip(self.keypoints.iter())
    }

    pub fn nose(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::Nose)
    }

    pub fn left_eye(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftEye)
    }

    pub fn right_eye(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightEye)
    }

    pub fn left_ear(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftEar)
    }

    pub fn right_ear(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightEar)
    }

    pub fn left_shoulder(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftShoulder)
    }

    pub fn right_shoulder(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightShoulder)
    }

    pub fn left_elbow(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftElbow)
    }

    pub fn right_elbow(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightElbow)
    }

    pub fn left_wrist(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftWrist)
    }

    pub fn right_wrist(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightWrist)
    }

    pub fn left_hip(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftHip)
    }

    pub fn right_hip(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightHip)
    }

    pub fn left_knee(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftKnee)
    }

    pub fn right_knee(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightKnee)
    }

    pub fn left_ankle(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::LeftAnkle)
    }

    pub fn right_ankle(&self) -> &Keypoint {
        self.keypoint(KeypointIndex::RightAnkle)
    }
}

impl std::ops::Index<KeypointIndex> for Pose {
    type Output = Keypoint;

    fn index(&self, index: KeypointIndex) -> &Keypoint {
        self.keypoint(index)
    }
}
