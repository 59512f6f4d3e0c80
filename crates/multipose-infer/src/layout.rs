//! Field layout of one candidate block in the MoveNet multipose output.
//!
//! The model emits a `[1, N, 56]` tensor. Each candidate block holds the 17
//! keypoints as `(y, x, confidence)` triples, then the bounding box as
//! `(y_min, x_min, y_max, x_max)`, then the overall pose score.

use crate::pose::KEYPOINT_COUNT;

/// A contiguous run of fields inside a candidate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub count: usize,
}

impl Field {
    pub const fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    /// One past the last index this field occupies.
    pub const fn end(&self) -> usize {
        self.offset + self.count
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.end()
    }
}

/// Named offsets of every field in a candidate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorLayout {
    /// Keypoint triples, `3 * KEYPOINT_COUNT` values.
    pub keypoints: Field,
    /// Bounding box as `(y_min, x_min, y_max, x_max)`.
    pub bbox: Field,
    /// Overall pose score.
    pub score: Field,
    /// Stride between consecutive candidate blocks.
    pub stride: usize,
}

/// Values stored per keypoint: y, x, confidence.
pub const KEYPOINT_STRIDE: usize = 3;

/// Fields per candidate in the MoveNet multipose layout.
pub const MOVENET_FIELDS: usize = 56;

/// The MoveNet multipose layout: keypoints at 0..51, box at 51..55, score at 55.
pub const MOVENET_MULTIPOSE: TensorLayout = TensorLayout {
    keypoints: Field::new(0, KEYPOINT_STRIDE * KEYPOINT_COUNT),
    bbox: Field::new(KEYPOINT_STRIDE * KEYPOINT_COUNT, 4),
    score: Field::new(KEYPOINT_STRIDE * KEYPOINT_COUNT + 4, 1),
    stride: MOVENET_FIELDS,
};

impl TensorLayout {
    /// Same field offsets with a wider candidate stride.
    ///
    /// Fails when the stride cannot hold every field.
    pub fn with_stride(self, stride: usize) -> Option<Self> {
        if stride < self.min_stride() {
            return None;
        }
        Some(Self { stride, ..self })
    }

    /// Smallest stride that holds every field.
    pub fn min_stride(&self) -> usize {
        self.keypoints.end().max(self.bbox.end()).max(self.score.end())
    }

    /// Whether every field is wide enough for the values decoded from it.
    pub fn is_complete(&self) -> bool {
        self.keypoints.count >= KEYPOINT_STRIDE * KEYPOINT_COUNT
            && self.bbox.count >= 4
            && self.score.count >= 1
    }

    /// Offset of keypoint `index` relative to the start of its block.
    pub fn keypoint_offset(&self, index: usize) -> usize {
        self.keypoints.offset + KEYPOINT_STRIDE * index
    }

    /// Whether a position within a candidate block holds the pose score.
    pub fn is_score(&self, field_index: usize) -> bool {
        self.score.contains(field_index)
    }
}

impl Default for TensorLayout {
    fn default() -> Self {
        MOVENET_MULTIPOSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movenet_offsets() {
        assert_eq!(MOVENET_MULTIPOSE.keypoints, Field::new(0, 51));
        assert_eq!(MOVENET_MULTIPOSE.bbox, Field::new(51, 4));
        assert_eq!(MOVENET_MULTIPOSE.score, Field::new(55, 1));
        assert_eq!(MOVENET_MULTIPOSE.min_stride(), MOVENET_FIELDS);
    }

    #[test]
    fn test_keypoint_offset() {
        assert_eq!(MOVENET_MULTIPOSE.keypoint_offset(0), 0);
        assert_eq!(MOVENET_MULTIPOSE.keypoint_offset(16), 48);
    }

    #[test]
    fn test_is_score() {
        assert!(MOVENET_MULTIPOSE.is_score(55));
        assert!(!MOVENET_MULTIPOSE.is_score(54));
        assert!(!MOVENET_MULTIPOSE.is_score(56));
    }

    #[test]
    fn test_truncated_layout_is_incomplete() {
        let layout = TensorLayout {
            bbox: Field::new(51, 2),
            ..MOVENET_MULTIPOSE
        };
        assert!(MOVENET_MULTIPOSE.is_complete());
        assert!(!layout.is_complete());
    }

    #[test]
    fn test_with_stride() {
        assert_eq!(MOVENET_MULTIPOSE.with_stride(60).map(|l| l.stride), Some(60));
        assert_eq!(MOVENET_MULTIPOSE.with_stride(55), None);
    }
}
