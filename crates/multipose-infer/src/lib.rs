//! Decoding, filtering and temporal smoothing of MoveNet multipose outputs.
//!
//! Raw `[1, N, 56]` model output goes through an optional per-channel One
//! Euro [`FilterBank`], then [`decode`] turns each candidate block that
//! reaches the score threshold into a [`Pose`] with bottom-up normalized
//! coordinates. [`PosePipeline`] runs both steps per frame and owns the
//! smoothing state of one tracking session.

pub mod config;
pub mod coords;
pub mod decode;
pub mod error;
pub mod filter;
pub mod filterbank;
pub mod layout;
pub mod pipeline;
pub mod pose;
pub mod schema;

pub use config::{FilterConfig, PipelineConfig};
pub use decode::{decode, decode_candidate, PoseDecoder};
pub use error::PoseError;
pub use filter::TemporalFilter;
pub use filterbank::FilterBank;
pub use layout::{Field, TensorLayout, MOVENET_FIELDS, MOVENET_MULTIPOSE};
pub use pipeline::{process_frame, PosePipeline, TrackingSession};
pub use pose::{Keypoint, KeypointIndex, Pose, KEYPOINT_COUNT};
pub use schema::{poses_from_json, poses_to_json};
