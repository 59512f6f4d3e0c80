use multipose_base::TensorError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    /// Buffer or tensor size inconsistent with the declared candidate count
    /// or field width. No partial result accompanies this error.
    ShapeMismatch { expected: String, got: String },
    /// Wrong number or kind of inputs supplied by the caller.
    InvalidInput(String),
    /// Configuration could not be parsed or holds out-of-range values.
    Config(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            PoseError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            PoseError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {}

impl From<TensorError> for PoseError {
    fn from(err: TensorError) -> Self {
        match err {
            TensorError::ShapeOverflow => PoseError::ShapeMismatch {
                expected: "a shape whose element count fits in usize".to_string(),
                got: "overflowing dimensions".to_string(),
            },
            TensorError::ShapeMismatch { expected, got } => PoseError::ShapeMismatch {
                expected: format!("{expected} elements"),
                got: format!("{got} elements"),
            },
            TensorError::RankMismatch { expected, got } => PoseError::ShapeMismatch {
                expected: format!("rank {expected}"),
                got: format!("rank {got}"),
            },
        }
    }
}
