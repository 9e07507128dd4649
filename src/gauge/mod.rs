//! Gauge evaluation — metrics, threshold models and the classifier.
//!
//! Everything here is pure: no I/O, no clocks, no shared state.

pub mod classify;
pub mod metric;
pub mod threshold;

pub use classify::{Severity, classify};
pub use metric::Metric;
pub use threshold::{Direction, ThresholdModel, ThresholdTable};
