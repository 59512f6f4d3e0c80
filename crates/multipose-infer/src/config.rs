use std::path::Path;

use serde::Deserialize;

use crate::PoseError;

/// One Euro filter parameters shared by every channel of a filter bank.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    min_cutoff: f32,
    beta: f32,
    derivative_cutoff: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_cutoff: 0.5,
            beta: 3.0,
            derivative_cutoff: 1.0,
        }
    }
}

impl FilterConfig {
    /// Set the baseline cutoff frequency.
    pub fn with_min_cutoff(mut self, min_cutoff: f32) -> Self {
        self.min_cutoff = min_cutoff;
        self
    }

    /// Set the speed coefficient.
    pub fn with_beta(mut self, beta: f32) -> Self {
        self.beta = beta;
        self
    }

    /// Set the cutoff used to smooth the derivative estimate.
    pub fn with_derivative_cutoff(mut self, derivative_cutoff: f32) -> Self {
        self.derivative_cutoff = derivative_cutoff;
        self
    }

    pub fn min_cutoff(&self) -> f32 {
        self.min_cutoff
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    pub fn derivative_cutoff(&self) -> f32 {
        self.derivative_cutoff
    }

    pub fn validate(&self) -> Result<(), PoseError> {
        let params = [
            ("min_cutoff", self.min_cutoff),
            ("beta", self.beta),
            ("derivative_cutoff", self.derivative_cutoff),
        ];
        for (name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(PoseError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Per-frame pipeline settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    min_score: f32,
    smoothing: bool,
    sort_by_score: bool,
    filter: FilterConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            smoothing: true,
            sort_by_score: false,
            filter: FilterConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PoseError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| PoseError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PoseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| PoseError::Config(format!("{}: {err}", path.display())))?;
        Self::from_json(&json)
    }

    /// Set the minimum pose score a candidate needs to be kept.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Enable or disable temporal smoothing.
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Sort kept poses by descending score instead of candidate order.
    pub fn with_sort_by_score(mut self, sort_by_score: bool) -> Self {
        self.sort_by_score = sort_by_score;
        self
    }

    /// Set the smoothing filter parameters.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn min_score(&self) -> f32 {
        self.min_score
    }

    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    pub fn sort_by_score(&self) -> bool {
        self.sort_by_score
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn validate(&self) -> Result<(), PoseError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(PoseError::Config(format!(
                "min_score must be in [0, 1], got {}",
                self.min_score
            )));
        }
        self.filter.validate()
    }
}
