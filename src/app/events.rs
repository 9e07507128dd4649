//! Outbound gauge events.
//!
//! The dashboard state and router emit these through the
//! [`EventSink`](super::ports::EventSink) port.  The presentation layer (or
//! a log adapter) decides what to do with them.

use crate::error::Error;
use crate::gauge::{Metric, Severity};
use crate::link::message::Channel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaugeEvent {
    /// The service booted with this many configured metrics.
    Started { configured: usize },

    /// A metric's verdict changed.
    SeverityChanged {
        metric: Metric,
        from: Severity,
        to: Severity,
        value: f32,
    },

    /// The selected gauge screen changed.
    ChannelChanged { from: Channel, to: Channel },

    /// The dimmer level changed; `brightness` is the backlight duty.
    BrightnessChanged { dimmer: u8, brightness: u8 },

    /// The numeric overlay was switched on or off.
    OverlayToggled(bool),

    /// The link went online or was declared lost.
    LinkChanged { online: bool },

    /// The remote sender reported a fresh boot.
    RemoteStartup,

    /// A frame or message was dropped.
    FrameDropped(Error),

    /// State returned to power-on defaults.
    Reset,
}
