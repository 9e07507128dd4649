//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every gauge event through the `log`
//! facade.  The replay binary uses it directly; on the dashboard it sits
//! next to the display adapter as a serial trace.

use log::{info, warn};

use crate::app::events::GaugeEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`GaugeEvent`].
pub struct LogEventSink {
    emitted: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self { emitted: 0 }
    }

    /// Events logged so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GaugeEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event {
            GaugeEvent::Started { configured } => {
                info!("START | metrics={}", configured);
            }
            GaugeEvent::SeverityChanged {
                metric,
                from,
                to,
                value,
            } => {
                if to.is_elevated() {
                    warn!("GAUGE | {} = {:.1} | {:?} -> {:?}", metric.name(), value, from, to);
                } else {
                    info!("GAUGE | {} = {:.1} | {:?} -> {:?}", metric.name(), value, from, to);
                }
            }
            GaugeEvent::ChannelChanged { from, to } => {
                info!("SCREEN | {:?} -> {:?}", from, to);
            }
            GaugeEvent::BrightnessChanged { dimmer, brightness } => {
                info!("DIMMER | level={} duty={}", dimmer, brightness);
            }
            GaugeEvent::OverlayToggled(on) => {
                info!("OVERLAY | {}", if *on { "numbers" } else { "icons" });
            }
            GaugeEvent::LinkChanged { online } => {
                info!("LINK | {}", if *online { "online" } else { "lost" });
            }
            GaugeEvent::RemoteStartup => {
                info!("LINK | remote sender booted");
            }
            GaugeEvent::FrameDropped(reason) => {
                warn!("DROP | {}", reason);
            }
            GaugeEvent::Reset => {
                info!("RESET | power-on state");
            }
        }
    }
}
