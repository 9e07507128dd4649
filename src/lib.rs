//! GaugeLink dashboard core library.
//!
//! Threshold classification and link message handling for the in-vehicle
//! gauge cluster.  Rendering and the radio transport live elsewhere; this
//! crate turns raw link frames into per-metric values and severity
//! verdicts.
//!
//! ```text
//! frames ──▶ link (inbox, codec) ──▶ app (router, dashboard) ──▶ events
//!                                          │
//!                                   gauge (thresholds, classify)
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod gauge;
pub mod link;
