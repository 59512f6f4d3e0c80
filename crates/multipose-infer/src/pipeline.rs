use multipose_base::log::{debug, trace};
use multipose_base::Tensor;

use crate::config::{FilterConfig, PipelineConfig};
use crate::decode::PoseDecoder;
use crate::filterbank::FilterBank;
use crate::pose::Pose;
use crate::PoseError;

/// Smoothing state of one tracking session.
///
/// A session lasts as long as the caller keeps feeding frames from one
/// stream. Concurrent streams each need their own session.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    filter_bank: FilterBank,
    frames: u64,
}

impl TrackingSession {
    pub fn new(config: FilterConfig) -> Self {
        debug!("starting tracking session with {:?}", config);
        Self {
            filter_bank: FilterBank::new(config),
            frames: 0,
        }
    }

    pub fn filter_bank(&self) -> &FilterBank {
        &self.filter_bank
    }

    /// Frames processed since the session started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start over with a fresh filter bank.
    pub fn reset(&mut self) {
        debug!("resetting tracking session after {} frames", self.frames);
        self.filter_bank = FilterBank::new(*self.filter_bank.config());
        self.frames = 0;
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

/// Decode one raw `[1, N, fields]` model output into poses.
///
/// With `smoothing_enabled`, the raw values go through the session's filter
/// bank before decoding. Poses with a score below `min_score` are dropped;
/// the rest keep candidate order.
pub fn process_frame(
    raw: &Tensor<f32>,
    session: &mut TrackingSession,
    min_score: f32,
    smoothing_enabled: bool,
) -> Result<Vec<Pose>, PoseError> {
    let smoothing = if smoothing_enabled {
        Smoothing::Tick
    } else {
        Smoothing::Off
    };
    run_frame(raw, session, min_score, false, smoothing)
}

#[derive(Debug, Clone, Copy)]
enum Smoothing {
    Off,
    Tick,
    At(f64),
}

fn run_frame(
    raw: &Tensor<f32>,
    session: &mut TrackingSession,
    min_score: f32,
    sort_by_score: bool,
    smoothing: Smoothing,
) -> Result<Vec<Pose>, PoseError> {
    let (batch, candidates, fields) = raw.dims3()?;
    if batch != 1 {
        return Err(PoseError::ShapeMismatch {
            expected: format!("[1, N, {fields}]"),
            got: format!("{:?}", raw.shape),
        });
    }

    let decoder = PoseDecoder::with_stride(fields)?
        .with_min_score(min_score)
        .with_sort_by_score(sort_by_score);

    let poses = match smoothing {
        Smoothing::Off => decoder.decode(raw.as_slice(), candidates)?,
        Smoothing::Tick => {
            let filtered = session.filter_bank.apply(raw.as_slice(), fields)?;
            decoder.decode(&filtered, candidates)?
        }
        Smoothing::At(timestamp) => {
            let filtered = session
                .filter_bank
                .apply_at(raw.as_slice(), fields, timestamp)?;
            decoder.decode(&filtered, candidates)?
        }
    };

    session.frames += 1;
    trace!(
        "frame {}: kept {} of {} candidates",
        session.frames,
        poses.len(),
        candidates
    );
    Ok(poses)
}

/// Multi-person pose predictor over a stream of raw model outputs.
///
/// Owns the tracking session, so one pipeline serves one stream.
#[derive(Debug, Clone)]
pub struct PosePipeline {
    config: PipelineConfig,
    session: TrackingSession,
}

impl PosePipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, PoseError> {
        config.validate()?;
        let session = TrackingSession::new(*config.filter());
        Ok(Self { config, session })
    }

    /// Decode one frame using the configured threshold and smoothing.
    pub fn process(&mut self, raw: &Tensor<f32>) -> Result<Vec<Pose>, PoseError> {
        let smoothing = if self.config.smoothing() {
            Smoothing::Tick
        } else {
            Smoothing::Off
        };
        self.run(raw, smoothing)
    }

    /// Decode one frame captured at `timestamp` (seconds).
    pub fn process_at(&mut self, raw: &Tensor<f32>, timestamp: f64) -> Result<Vec<Pose>, PoseError> {
        let smoothing = if self.config.smoothing() {
            Smoothing::At(timestamp)
        } else {
            Smoothing::Off
        };
        self.run(raw, smoothing)
    }

    /// Decode the single model output in `inputs`.
    pub fn predict(&mut self, inputs: &[&Tensor<f32>]) -> Result<Vec<Pose>, PoseError> {
        match inputs {
            [raw] => self.process(raw),
            _ => Err(PoseError::InvalidInput(format!(
                "expected a single input tensor, got {}",
                inputs.len()
            ))),
        }
    }

    /// Start a new tracking session, discarding all smoothing state.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn run(&mut self, raw: &Tensor<f32>, smoothing: Smoothing) -> Result<Vec<Pose>, PoseError> {
        run_frame(
            raw,
            &mut self.session,
            self.config.min_score(),
            self.config.sort_by_score(),
            smoothing,
        )
    }
}

impl Default for PosePipeline {
    fn default() -> Self {
        let config = PipelineConfig::default();
        let session = TrackingSession::new(*config.filter());
        Self { config, session }
    }
}
