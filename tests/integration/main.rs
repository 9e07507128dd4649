//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives the gauge core end to end
//! from raw frames, against a recording event sink.

mod mock_sink;
mod scenario_tests;
mod service_tests;
