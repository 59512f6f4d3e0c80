//! One Euro filter: adaptive low-pass smoothing for noisy scalar tracks.
//!
//! Slow or static signals are smoothed heavily; fast movements raise the
//! cutoff frequency so they pass through with little lag.

use std::f32::consts::PI;

use crate::config::FilterConfig;

/// alpha = 1 / (1 + tau/Te), tau = 1/(2*pi*fc)
fn smoothing_factor(te: f32, cutoff: f32) -> f32 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / te)
}

/// Exponential smoothing step from `prev` toward `value`
fn low_pass(prev: f32, value: f32, alpha: f32) -> f32 {
    alpha * value + (1.0 - alpha) * prev
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FilterState {
    value: f32,
    derivative: f32,
    timestamp: f64,
}

/// One Euro filter for a single scalar channel
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalFilter {
    /// Baseline cutoff frequency; lower = smoother at rest
    min_cutoff: f32,
    /// Speed coefficient; higher = less lag during fast motion
    beta: f32,
    /// Cutoff used to smooth the derivative estimate
    derivative_cutoff: f32,
    state: Option<FilterState>,
}

impl TemporalFilter {
    pub fn new(min_cutoff: f32, beta: f32, derivative_cutoff: f32) -> Self {
        Self {
            min_cutoff,
            beta,
            derivative_cutoff,
            state: None,
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.min_cutoff(), config.beta(), config.derivative_cutoff())
    }

    /// Filter a sample taken one time unit after the previous one.
    pub fn filter(&mut self, value: f32) -> f32 {
        let timestamp = self.state.map_or(0.0, |state| state.timestamp + 1.0);
        self.filter_at(value, timestamp)
    }

    /// Filter a sample taken at `timestamp`.
    ///
    /// The first sample passes through unchanged. A timestamp that does not
    /// advance past the previous one returns the previous filtered value and
    /// leaves the state untouched.
    pub fn filter_at(&mut self, value: f32, timestamp: f64) -> f32 {
        let Some(state) = self.state.as_mut() else {
            self.state = Some(FilterState {
                value,
                derivative: 0.0,
                timestamp,
            });
            return value;
        };

        let te = (timestamp - state.timestamp) as f32;
        if te.is_nan() || te <= 0.0 {
            return state.value;
        }

        let raw_derivative = (value - state.value) / te;
        let derivative = low_pass(
            state.derivative,
            raw_derivative,
            smoothing_factor(te, self.derivative_cutoff),
        );

        let cutoff = self.min_cutoff + self.beta * derivative.abs();
        let filtered = low_pass(state.value, value, smoothing_factor(te, cutoff));

        *state = FilterState {
            value: filtered,
            derivative,
            timestamp,
        };
        filtered
    }

    /// Last filtered value, if any sample has been seen
    pub fn value(&self) -> Option<f32> {
        self.state.map(|state| state.value)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn reset(&mut self) {
        self.state = None;
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
}

impl Default for TemporalFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}
