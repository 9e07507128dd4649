//! Per-metric threshold model.
//!
//! A [`ThresholdModel`] is built once from configuration and never mutated.
//! Unset cutoffs are `None`; there is no magic `-1` value, so negative
//! readings (sub-zero temperatures, southern latitudes) classify normally.

use heapless::String;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gauge::metric::Metric;

/// Maximum visible characters in a unit label.
pub const UNIT_MAX_CHARS: usize = 3;

/// Unit label storage.  Sized for [`UNIT_MAX_CHARS`] characters of up to
/// four UTF-8 bytes each.
pub type Unit = String<12>;

/// Whether a threshold trips when the value rises above or falls below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdModel {
    metric: Metric,
    min: f32,
    max: f32,
    alert: Option<f32>,
    warning: Option<f32>,
    direction: Direction,
    unit: Unit,
}

impl ThresholdModel {
    /// Validate and build a threshold model.
    ///
    /// Rejects an inverted or non-finite range, cutoffs outside the range,
    /// and unit labels longer than [`UNIT_MAX_CHARS`].  Cutoffs that are
    /// merely ordered against `direction` are accepted with a warning; the
    /// classifier resolves them in favour of the alert.
    pub fn new(
        metric: Metric,
        min: f32,
        max: f32,
        alert: Option<f32>,
        warning: Option<f32>,
        direction: Direction,
        unit: &str,
    ) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteRange(metric));
        }
        if min > max {
            return Err(ConfigError::InvertedRange(metric));
        }

        let in_range = |v: f32| v.is_finite() && (min..=max).contains(&v);
        if alert.is_some_and(|a| !in_range(a)) {
            return Err(ConfigError::AlertOutOfRange(metric));
        }
        if warning.is_some_and(|w| !in_range(w)) {
            return Err(ConfigError::WarningOutOfRange(metric));
        }

        if unit.chars().count() > UNIT_MAX_CHARS {
            return Err(ConfigError::UnitTooLong(metric));
        }
        let mut label = Unit::new();
        label
            .push_str(unit)
            .map_err(|()| ConfigError::UnitTooLong(metric))?;

        if let (Some(a), Some(w)) = (alert, warning) {
            let ordered = match direction {
                Direction::Above => a > w,
                Direction::Below => a < w,
            };
            if !ordered {
                warn!(
                    "{}: alert {} is not beyond warning {} for {:?}; alert takes precedence",
                    metric.name(),
                    a,
                    w,
                    direction
                );
            }
        }

        Ok(Self {
            metric,
            min,
            max,
            alert,
            warning,
            direction,
            unit: label,
        })
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn alert(&self) -> Option<f32> {
        self.alert
    }

    pub fn warning(&self) -> Option<f32> {
        self.warning
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Clamp a value into `[min, max]` for display.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Threshold models indexed by metric.  Metrics without a model are
/// displayed but never flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    models: [Option<ThresholdModel>; Metric::COUNT],
}

impl ThresholdTable {
    pub fn new() -> Self {
        Self {
            models: core::array::from_fn(|_| None),
        }
    }

    /// Add a model.  Each metric may be configured once.
    pub fn insert(&mut self, model: ThresholdModel) -> Result<(), ConfigError> {
        let slot = &mut self.models[model.metric().index()];
        if slot.is_some() {
            return Err(ConfigError::DuplicateMetric(model.metric()));
        }
        *slot = Some(model);
        Ok(())
    }

    pub fn get(&self, metric: Metric) -> Option<&ThresholdModel> {
        self.models[metric.index()].as_ref()
    }

    /// Number of configured metrics.
    pub fn len(&self) -> usize {
        self.models.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThresholdModel> {
        self.models.iter().flatten()
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::new()
    }
}
