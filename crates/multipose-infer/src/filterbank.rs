use multipose_base::log::debug;

use crate::config::FilterConfig;
use crate::filter::TemporalFilter;
use crate::layout::TensorLayout;
use crate::PoseError;

/// One [`TemporalFilter`] per scalar channel of a flattened pose tensor.
///
/// The channel of a value is its position in the flattened frame, so a given
/// field of a given candidate slot always goes through the same filter.
/// Candidate slots are assumed to keep their identity from frame to frame;
/// nothing re-associates people across frames, so a model that reorders its
/// candidates will blend coordinates of different people.
///
/// Pose score channels are copied through unfiltered.
#[derive(Debug, Clone)]
pub struct FilterBank {
    config: FilterConfig,
    layout: TensorLayout,
    filters: Vec<Option<TemporalFilter>>,
}

impl FilterBank {
    pub fn new(config: FilterConfig) -> Self {
        Self::with_layout(config, TensorLayout::default())
    }

    /// Filter bank that reads the score position from `layout`.
    pub fn with_layout(config: FilterConfig, layout: TensorLayout) -> Self {
        Self {
            config,
            layout,
            filters: Vec::new(),
        }
    }

    /// Filter a frame, advancing every channel by one time unit.
    pub fn apply(&mut self, frame: &[f32], fields_per_candidate: usize) -> Result<Vec<f32>, PoseError> {
        self.apply_with(frame, fields_per_candidate, |filter, value| filter.filter(value))
    }

    /// Filter a frame captured at `timestamp`.
    pub fn apply_at(
        &mut self,
        frame: &[f32],
        fields_per_candidate: usize,
        timestamp: f64,
    ) -> Result<Vec<f32>, PoseError> {
        self.apply_with(frame, fields_per_candidate, |filter, value| {
            filter.filter_at(value, timestamp)
        })
    }

    fn apply_with<F>(
        &mut self,
        frame: &[f32],
        fields_per_candidate: usize,
        mut step: F,
    ) -> Result<Vec<f32>, PoseError>
    where
        F: FnMut(&mut TemporalFilter, f32) -> f32,
    {
        if fields_per_candidate == 0 || frame.len() % fields_per_candidate != 0 {
            return Err(PoseError::ShapeMismatch {
                expected: format!("a multiple of {fields_per_candidate} values"),
                got: format!("{} values", frame.len()),
            });
        }

        if frame.len() > self.filters.len() {
            debug!(
                "filter bank growing from {} to {} channels",
                self.filters.len(),
                frame.len()
            );
            self.filters.resize(frame.len(), None);
        }

        let config = self.config;
        let layout = self.layout;
        let filtered = frame
            .iter()
            .zip(self.filters.iter_mut())
            .enumerate()
            .map(|(channel, (&value, slot))| {
                if layout.is_score(channel % fields_per_candidate) {
                    return value;
                }
                let filter = slot.get_or_insert_with(|| TemporalFilter::from_config(&config));
                step(filter, value)
            })
            .collect();

        Ok(filtered)
    }

    /// Number of channels that have a live filter.
    pub fn active_channels(&self) -> usize {
        self.filters.iter().filter(|slot| slot.is_some()).count()
    }

    /// Filter for a channel, if one has been created.
    pub fn channel(&self, channel: usize) -> Option<&TemporalFilter> {
        self.filters.get(channel).and_then(Option::as_ref)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn layout(&self) -> &TensorLayout {
        &self.layout
    }

    /// Drop every channel's state.
    pub fn reset(&mut self) {
        self.filters.clear();
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
