//! Gauge service — the application core.
//!
//! [`GaugeService`] owns the router and the dashboard state and exposes a
//! hardware-agnostic API.  Events leave through an [`EventSink`] passed in
//! at each call, so the service is testable with a recording sink.
//!
//! ```text
//!  FrameInbox ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      GaugeService       │
//!  raw frame  ──▶ │  codec · Router · State │ ──▶ current_value()
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::config::GaugeConfig;
use crate::error::Result;
use crate::gauge::{Metric, Severity};
use crate::link::inbox::FrameInbox;
use crate::link::message::Message;

use super::events::GaugeEvent;
use super::ports::EventSink;
use super::router::{Router, RouterStats};
use super::state::Dashboard;

pub struct GaugeService {
    router: Router,
    dashboard: Dashboard,
}

impl GaugeService {
    /// Build the service with every tag routed.
    ///
    /// Fails with a config error if any threshold model is invalid; the
    /// caller must not continue booting.
    pub fn new(config: &GaugeConfig) -> Result<Self> {
        Self::with_router(config, Router::with_all_routes())
    }

    /// Build the service with a caller-supplied routing table.
    pub fn with_router(config: &GaugeConfig, router: Router) -> Result<Self> {
        let dashboard = Dashboard::new(config)?;
        Ok(Self { router, dashboard })
    }

    /// Announce the service.  Call once after construction.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let configured = self.dashboard.thresholds().len();
        info!("GaugeService started, {} metrics configured", configured);
        sink.emit(&GaugeEvent::Started { configured });
    }

    // ── Inbound ───────────────────────────────────────────────

    /// Decode and route one raw frame.  Bad frames are dropped.
    pub fn ingest(&mut self, bytes: &[u8], sink: &mut impl EventSink) {
        self.router.route_frame(bytes, &mut self.dashboard, sink);
    }

    /// Route an already-decoded message.
    pub fn route(&mut self, message: &Message, sink: &mut impl EventSink) {
        self.router.route(message, &mut self.dashboard, sink);
    }

    /// Drain the inbox, oldest frame first.  Returns frames processed.
    pub fn poll(&mut self, inbox: &mut FrameInbox, sink: &mut impl EventSink) -> usize {
        let mut processed = 0;
        inbox.drain(|frame| {
            self.ingest(&frame, sink);
            processed += 1;
        });
        processed
    }

    /// Return to power-on state (thresholds and routes are kept).
    pub fn reset(&mut self, sink: &mut impl EventSink) {
        self.dashboard.reset();
        sink.emit(&GaugeEvent::Reset);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last value and verdict for `metric`.
    pub fn current_value(&self, metric: Metric) -> Option<(f32, Severity)> {
        self.dashboard.current_value(metric)
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Mutable access for the link watchdog (`mark_link_lost`).
    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn stats(&self) -> RouterStats {
        self.router.stats()
    }
}
