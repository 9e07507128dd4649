//! Severity classification.
//!
//! ```text
//!   value ──▶ no data? ──yes──▶ Unknown
//!               │no
//!               ▼
//!        warning tripped? ──▶ Warning
//!               ▼
//!         alert tripped?  ──▶ Alert     (escalate only)
//!               ▼
//!             Normal
//! ```
//!
//! The warning check runs first and the alert check can only raise the
//! verdict, so a misconfigured model with `alert` inside `warning` still
//! reports Alert when both trip.

use crate::gauge::threshold::{Direction, ThresholdModel};

/// Classification outcome for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No data for this metric.
    Unknown,
    Normal,
    /// Amber.
    Warning,
    /// Red.
    Alert,
}

impl Severity {
    /// Rank used for escalation.  `Unknown` ranks below everything and is
    /// never the result of escalating.
    const fn rank(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Normal => 1,
            Self::Warning => 2,
            Self::Alert => 3,
        }
    }

    /// The more severe of `self` and `other`.
    #[must_use]
    pub const fn escalate(self, other: Severity) -> Severity {
        if other.rank() > self.rank() { other } else { self }
    }

    /// True for Warning and Alert.
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Warning | Self::Alert)
    }
}

/// Classify `value` against `threshold`.
///
/// `None` and NaN both mean "no data" and yield [`Severity::Unknown`].
/// Total: every other input maps to Normal, Warning or Alert.
pub fn classify(threshold: &ThresholdModel, value: Option<f32>) -> Severity {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return Severity::Unknown;
    };

    let tripped = |cutoff: f32| match threshold.direction() {
        Direction::Above => value > cutoff,
        Direction::Below => value < cutoff,
    };

    let mut verdict = Severity::Normal;
    if threshold.warning().is_some_and(tripped) {
        verdict = verdict.escalate(Severity::Warning);
    }
    if threshold.alert().is_some_and(tripped) {
        verdict = verdict.escalate(Severity::Alert);
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gauge::metric::Metric;

    fn model(direction: Direction, alert: Option<f32>, warning: Option<f32>) -> ThresholdModel {
        ThresholdModel::new(Metric::CoolantTemp, 0.0, 100.0, alert, warning, direction, "C").unwrap()
    }

    #[test]
    fn above_scenario() {
        let t = model(Direction::Above, Some(95.0), Some(80.0));
        assert_eq!(classify(&t, Some(90.0)), Severity::Warning);
        assert_eq!(classify(&t, Some(97.0)), Severity::Alert);
        assert_eq!(classify(&t, Some(50.0)), Severity::Normal);
        assert_eq!(classify(&t, None), Severity::Unknown);
    }

    #[test]
    fn cutoffs_are_exclusive() {
        let t = model(Direction::Above, Some(95.0), Some(80.0));
        assert_eq!(classify(&t, Some(80.0)), Severity::Normal);
        assert_eq!(classify(&t, Some(95.0)), Severity::Warning);
    }

    #[test]
    fn below_mirrors_above() {
        let t = model(Direction::Below, Some(10.0), Some(20.0));
        assert_eq!(classify(&t, Some(40.0)), Severity::Normal);
        assert_eq!(classify(&t, Some(15.0)), Severity::Warning);
        assert_eq!(classify(&t, Some(5.0)), Severity::Alert);
        assert_eq!(classify(&t, Some(20.0)), Severity::Normal);
    }

    #[test]
    fn unset_cutoffs_are_skipped() {
        let t = model(Direction::Above, None, None);
        assert_eq!(classify(&t, Some(1.0e9)), Severity::Normal);
        assert_eq!(classify(&t, Some(-1.0)), Severity::Normal);

        let warn_only = model(Direction::Below, None, Some(20.0));
        assert_eq!(classify(&warn_only, Some(10.0)), Severity::Warning);
        assert_eq!(classify(&warn_only, Some(-50.0)), Severity::Warning);
    }

    #[test]
    fn negative_reading_is_not_no_data() {
        let t = model(Direction::Above, Some(95.0), Some(80.0));
        assert_eq!(classify(&t, Some(-1.0)), Severity::Normal);
    }

    #[test]
    fn nan_is_no_data() {
        let t = model(Direction::Above, Some(95.0), Some(80.0));
        assert_eq!(classify(&t, Some(f32::NAN)), Severity::Unknown);
    }

    #[test]
    fn misordered_model_prefers_alert() {
        // alert below warning for an Above metric
        let t = model(Direction::Above, Some(70.0), Some(80.0));
        assert_eq!(classify(&t, Some(75.0)), Severity::Alert);
        assert_eq!(classify(&t, Some(90.0)), Severity::Alert);
        assert_eq!(classify(&t, Some(60.0)), Severity::Normal);
    }

    #[test]
    fn escalate_never_downgrades() {
        assert_eq!(Severity::Alert.escalate(Severity::Warning), Severity::Alert);
        assert_eq!(Severity::Warning.escalate(Severity::Alert), Severity::Alert);
        assert_eq!(Severity::Normal.escalate(Severity::Unknown), Severity::Normal);
    }
}
