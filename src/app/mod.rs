//! Application core — routing and dashboard state, zero I/O.
//!
//! All interaction with the presentation layer happens through the **port
//! traits** in [`ports`], keeping this layer testable without a display or
//! a radio.

pub mod events;
pub mod ports;
pub mod router;
pub mod service;
pub mod state;
