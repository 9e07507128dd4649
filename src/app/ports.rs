//! Port traits — the boundary between the gauge core and the outside world.
//!
//! ```text
//!   link frames ──▶ Router ──▶ MessageHandlers (Dashboard) ──▶ EventSink
//! ```
//!
//! The [`Router`](super::router::Router) is generic over both traits, so the
//! routing rules can be tested against recording mocks and the dashboard
//! can be driven without a router.

use crate::link::message::{ButtonPress, Channel, SourceTag, Telemetry};

use super::events::GaugeEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (core → presentation / logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`GaugeEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &GaugeEvent);
}

/// Sink that discards everything.
impl EventSink for () {
    fn emit(&mut self, _event: &GaugeEvent) {}
}

// ───────────────────────────────────────────────────────────────
// Message handlers (router → consumers)
// ───────────────────────────────────────────────────────────────

/// One handler per payload kind.  The router calls exactly one of these
/// per routed message.
///
/// Button and channel payloads arrive as `None` when the sender's liveness
/// flag was clear; handlers must leave their state untouched in that case.
pub trait MessageHandlers {
    /// Telemetry from any of the telemetry-carrying tags.
    fn on_telemetry(&mut self, source: SourceTag, telemetry: Telemetry, sink: &mut impl EventSink);

    /// A console button press, if any this cycle.
    fn on_button(&mut self, press: Option<ButtonPress>, sink: &mut impl EventSink);

    /// A request to switch the gauge screen, if any this cycle.
    fn on_channel(&mut self, channel: Option<Channel>, sink: &mut impl EventSink);

    /// Startup / Online link flags.
    fn on_link(&mut self, source: SourceTag, live: bool, sink: &mut impl EventSink);
}
