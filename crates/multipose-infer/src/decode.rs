use crate::coords::{box_to_bottom_up, to_bottom_up};
use crate::layout::{TensorLayout, MOVENET_FIELDS, MOVENET_MULTIPOSE};
use crate::pose::{Keypoint, Pose};
use crate::PoseError;

/// Decode every candidate block whose score reaches `min_score`.
///
/// `buffer` holds `num_candidates` blocks of `fields_per_candidate` values in
/// the MoveNet multipose layout; extra trailing values are ignored. Kept poses
/// come back in candidate order.
pub fn decode(
    buffer: &[f32],
    num_candidates: usize,
    fields_per_candidate: usize,
    min_score: f32,
) -> Result<Vec<Pose>, PoseError> {
    PoseDecoder::with_stride(fields_per_candidate)?
        .with_min_score(min_score)
        .decode(buffer, num_candidates)
}

/// Decode a single candidate block into a [`Pose`].
///
/// Vertical coordinates are flipped from the model's top-down origin to a
/// bottom-up origin. Values are carried over as-is, in range or not.
/// A block shorter than the layout needs is a `ShapeMismatch`.
pub fn decode_candidate(block: &[f32], layout: &TensorLayout) -> Result<Pose, PoseError> {
    if !layout.is_complete() {
        return Err(PoseError::InvalidInput(format!(
            "layout {:?} cannot hold a full pose",
            layout
        )));
    }
    if block.len() < layout.min_stride() {
        return Err(PoseError::ShapeMismatch {
            expected: format!("at least {} values per candidate", layout.min_stride()),
            got: format!("{} values", block.len()),
        });
    }

    let b = layout.bbox.offset;
    let bbox = box_to_bottom_up(block[b], block[b + 1], block[b + 2], block[b + 3]);

    let keypoints = std::array::from_fn(|k| {
        let o = layout.keypoint_offset(k);
        Keypoint {
            position: to_bottom_up(block[o], block[o + 1]),
            confidence: block[o + 2],
        }
    });

    Ok(Pose {
        score: block[layout.score.offset],
        bbox,
        keypoints,
    })
}

/// Decoder for one tensor layout with a fixed score threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseDecoder {
    layout: TensorLayout,
    min_score: f32,
    sort_by_score: bool,
}

impl PoseDecoder {
    pub fn new(layout: TensorLayout) -> Self {
        Self {
            layout,
            min_score: 0.0,
            sort_by_score: false,
        }
    }

    /// MoveNet layout with `fields_per_candidate` values per block.
    pub fn with_stride(fields_per_candidate: usize) -> Result<Self, PoseError> {
        let layout = MOVENET_MULTIPOSE
            .with_stride(fields_per_candidate)
            .ok_or_else(|| PoseError::ShapeMismatch {
                expected: format!("at least {MOVENET_FIELDS} fields per candidate"),
                got: format!("{fields_per_candidate}"),
            })?;
        Ok(Self::new(layout))
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Sort kept poses by descending score; equal scores keep candidate order.
    pub fn with_sort_by_score(mut self, sort_by_score: bool) -> Self {
        self.sort_by_score = sort_by_score;
        self
    }

    pub fn layout(&self) -> &TensorLayout {
        &self.layout
    }

    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    pub fn decode(&self, buffer: &[f32], num_candidates: usize) -> Result<Vec<Pose>, PoseError> {
        if !self.layout.is_complete() {
            return Err(PoseError::InvalidInput(format!(
                "layout {:?} cannot hold a full pose",
                self.layout
            )));
        }
        let stride = self.layout.stride;
        if stride == 0 || stride < self.layout.min_stride() {
            return Err(PoseError::ShapeMismatch {
                expected: format!("a stride of at least {}", self.layout.min_stride()),
                got: format!("{stride}"),
            });
        }
        let required = num_candidates
            .checked_mul(stride)
            .ok_or_else(|| PoseError::ShapeMismatch {
                expected: format!("{num_candidates} x {stride} values"),
                got: "a count that overflows usize".to_string(),
            })?;
        if buffer.len() < required {
            return Err(PoseError::ShapeMismatch {
                expected: format!("{required} values ({num_candidates} x {stride})"),
                got: format!("{} values", buffer.len()),
            });
        }

        let mut poses: Vec<Pose> = buffer[..required]
            .chunks_exact(stride)
            .filter(|block| block[self.layout.score.offset] >= self.min_score)
            .map(|block| decode_candidate(block, &self.layout))
            .collect::<Result<_, _>>()?;

        if self.sort_by_score {
            poses.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        Ok(poses)
    }
}

impl Default for PoseDecoder {
    fn default() -> Self {
        Self::new(MOVENET_MULTIPOSE)
    }
}
