//! Dashboard state — the single process-wide state object.
//!
//! Holds everything the presentation layer reads each refresh:
//!
//! - last known value and verdict per metric
//! - selected gauge screen
//! - dimmer level / backlight brightness
//! - numeric overlay toggle
//! - link liveness
//!
//! The router is the only writer (through [`MessageHandlers`]); the
//! presentation layer reads between frames on the same cooperative tick, so
//! no locking is needed.  [`Dashboard::new`] is the init path and
//! [`Dashboard::reset`] the teardown back to power-on state.

use log::{debug, info};

use crate::config::{DIMMER_MAX, GaugeConfig};
use crate::error::ConfigError;
use crate::gauge::{Metric, Severity, ThresholdTable, classify};
use crate::link::message::{Button, ButtonPress, Channel, PressType, SourceTag, Telemetry};

use super::events::GaugeEvent;
use super::ports::{EventSink, MessageHandlers};

/// Backlight duty at dimmer level 0.
const BRIGHTNESS_MAX: u8 = 255;
/// Duty removed per dimmer level.
const BRIGHTNESS_STEP: u8 = 25;

/// A single accepted sample, stamped with its arrival sequence number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub metric: Metric,
    pub value: f32,
    pub seq: u64,
}

/// Last known state of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSlot {
    /// Most recent reading, `None` until the first value arrives.
    pub last: Option<Reading>,
    pub severity: Severity,
}

impl MetricSlot {
    const EMPTY: Self = Self {
        last: None,
        severity: Severity::Unknown,
    };
}

pub struct Dashboard {
    thresholds: ThresholdTable,
    slots: [MetricSlot; Metric::COUNT],
    channel: Channel,
    dimmer: u8,
    show_numbers: bool,
    link_online: bool,
    remote_boots: u32,
    /// Arrival counter used to stamp readings.
    seq: u64,
    default_channel: Channel,
    default_dimmer: u8,
}

impl Dashboard {
    /// Build the power-on state from configuration.
    pub fn new(config: &GaugeConfig) -> Result<Self, ConfigError> {
        let thresholds = config.build_table()?;
        info!(
            "Dashboard: {} thresholds, channel={:?}, dimmer={}",
            thresholds.len(),
            config.default_channel,
            config.default_dimmer
        );
        Ok(Self {
            thresholds,
            slots: [MetricSlot::EMPTY; Metric::COUNT],
            channel: config.default_channel,
            dimmer: config.default_dimmer,
            show_numbers: false,
            link_online: false,
            remote_boots: 0,
            seq: 0,
            default_channel: config.default_channel,
            default_dimmer: config.default_dimmer,
        })
    }

    /// Return to power-on state.  Thresholds are kept.
    pub fn reset(&mut self) {
        self.slots = [MetricSlot::EMPTY; Metric::COUNT];
        self.channel = self.default_channel;
        self.dimmer = self.default_dimmer;
        self.show_numbers = false;
        self.link_online = false;
        self.remote_boots = 0;
        self.seq = 0;
        info!("Dashboard: reset to power-on state");
    }

    // ── Metric table ──────────────────────────────────────────

    /// Last value and verdict for `metric`; `None` until a value arrives.
    pub fn current_value(&self, metric: Metric) -> Option<(f32, Severity)> {
        let slot = &self.slots[metric.index()];
        slot.last.map(|r| (r.value, slot.severity))
    }

    /// Verdict for `metric`; Unknown until a value arrives.
    pub fn severity(&self, metric: Metric) -> Severity {
        self.slots[metric.index()].severity
    }

    /// Last value clamped into the configured range for drawing.
    pub fn display_value(&self, metric: Metric) -> Option<f32> {
        let (value, _) = self.current_value(metric)?;
        Some(match self.thresholds.get(metric) {
            Some(model) => model.clamp(value),
            None => value,
        })
    }

    pub fn slot(&self, metric: Metric) -> &MetricSlot {
        &self.slots[metric.index()]
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Store a reading and reclassify.  Returns the previous verdict when
    /// the verdict changed.
    fn record(&mut self, metric: Metric, value: f32) -> Option<Severity> {
        self.seq += 1;
        let verdict = match self.thresholds.get(metric) {
            Some(model) => classify(model, Some(value)),
            None => Severity::Normal,
        };
        let slot = &mut self.slots[metric.index()];
        let previous = slot.severity;
        slot.last = Some(Reading {
            metric,
            value,
            seq: self.seq,
        });
        slot.severity = verdict;
        (previous != verdict).then_some(previous)
    }

    // ── Screen / console ──────────────────────────────────────

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// 0 = full brightness, [`DIMMER_MAX`] = dimmest.
    pub fn dimmer(&self) -> u8 {
        self.dimmer
    }

    /// Backlight duty for the current dimmer level.
    pub fn brightness(&self) -> u8 {
        brightness_for(self.dimmer)
    }

    /// Numeric overlay.  A drawing hint only; verdicts ignore it.
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    fn select_channel(&mut self, to: Channel, sink: &mut impl EventSink) {
        if to == self.channel {
            return;
        }
        let from = self.channel;
        self.channel = to;
        info!("Channel {:?} -> {:?}", from, to);
        sink.emit(&GaugeEvent::ChannelChanged { from, to });
    }

    fn set_dimmer(&mut self, level: u8, sink: &mut impl EventSink) {
        let level = level.min(DIMMER_MAX);
        if level == self.dimmer {
            return;
        }
        self.dimmer = level;
        sink.emit(&GaugeEvent::BrightnessChanged {
            dimmer: level,
            brightness: self.brightness(),
        });
    }

    // ── Link ──────────────────────────────────────────────────

    pub fn link_online(&self) -> bool {
        self.link_online
    }

    /// Number of startup notices received from the remote sender.
    pub fn remote_boots(&self) -> u32 {
        self.remote_boots
    }

    /// Declare the link lost.  Called by whatever watches heartbeat timing.
    pub fn mark_link_lost(&mut self, sink: &mut impl EventSink) {
        if self.link_online {
            self.link_online = false;
            info!("Link lost");
            sink.emit(&GaugeEvent::LinkChanged { online: false });
        }
    }

    fn mark_link_online(&mut self, sink: &mut impl EventSink) {
        if !self.link_online {
            self.link_online = true;
            info!("Link online");
            sink.emit(&GaugeEvent::LinkChanged { online: true });
        }
    }
}

/// Backlight duty for a dimmer level.
pub fn brightness_for(dimmer: u8) -> u8 {
    BRIGHTNESS_MAX - dimmer.min(DIMMER_MAX) * BRIGHTNESS_STEP
}

impl MessageHandlers for Dashboard {
    fn on_telemetry(&mut self, source: SourceTag, telemetry: Telemetry, sink: &mut impl EventSink) {
        let Some(value) = telemetry.value.filter(|v| !v.is_nan()) else {
            debug!("{:?}: no data for {}", source, telemetry.metric.name());
            return;
        };
        if let Some(from) = self.record(telemetry.metric, value) {
            let to = self.severity(telemetry.metric);
            info!("{} {:?} -> {:?} ({})", telemetry.metric.name(), from, to, value);
            sink.emit(&GaugeEvent::SeverityChanged {
                metric: telemetry.metric,
                from,
                to,
                value,
            });
        }
    }

    fn on_button(&mut self, press: Option<ButtonPress>, sink: &mut impl EventSink) {
        let Some(ButtonPress { button, press }) = press else {
            return;
        };
        match (button, press) {
            (Button::BrightnessUp, PressType::Hold) => self.set_dimmer(0, sink),
            (Button::BrightnessUp, _) => self.set_dimmer(self.dimmer.saturating_sub(1), sink),
            (Button::BrightnessDown, PressType::Hold) => self.set_dimmer(DIMMER_MAX, sink),
            (Button::BrightnessDown, _) => self.set_dimmer(self.dimmer + 1, sink),
            (Button::Mode, PressType::Click) => self.select_channel(self.channel.next(), sink),
            (Button::Mode, PressType::Double) => {
                self.select_channel(self.channel.previous(), sink);
            }
            (Button::Mode, PressType::Hold) => self.select_channel(self.default_channel, sink),
            (Button::Setting, PressType::Click) => {
                self.show_numbers = !self.show_numbers;
                sink.emit(&GaugeEvent::OverlayToggled(self.show_numbers));
            }
            (Button::Setting, other) => debug!("Setting {:?} ignored", other),
        }
    }

    fn on_channel(&mut self, channel: Option<Channel>, sink: &mut impl EventSink) {
        if let Some(to) = channel {
            self.select_channel(to, sink);
        }
    }

    fn on_link(&mut self, source: SourceTag, live: bool, sink: &mut impl EventSink) {
        if !live {
            return;
        }
        if source == SourceTag::Startup {
            self.remote_boots = self.remote_boots.saturating_add(1);
            info!("Remote sender started (boot #{})", self.remote_boots);
            sink.emit(&GaugeEvent::RemoteStartup);
        }
        self.mark_link_online(sink);
    }
}
