//! Dispatch router.
//!
//! Demultiplexes decoded link messages to the handler for their payload
//! kind.  A tag must be registered before its messages are delivered;
//! everything else is logged and dropped.
//!
//! | Tag                              | Handler                          |
//! |----------------------------------|----------------------------------|
//! | Canbus, Gps, OilPressure, Fuel   | `MessageHandlers::on_telemetry`  |
//! | Buttons                          | `MessageHandlers::on_button`     |
//! | SetChannel                       | `MessageHandlers::on_channel`    |
//! | Startup, Online                  | `MessageHandlers::on_link`       |
//!
//! Routing keeps no per-message state: messages are handled to completion
//! in the order they are passed in, so a later reading for a metric always
//! replaces an earlier one downstream.

use log::{debug, warn};

use crate::error::Error;
use crate::link::codec;
use crate::link::message::{Message, SourceTag};

use super::events::GaugeEvent;
use super::ports::{EventSink, MessageHandlers};

/// Running totals for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStats {
    /// Messages delivered to a handler.
    pub routed: u32,
    /// Frames that failed to decode.
    pub malformed: u32,
    /// Messages whose tag had no registered handler.
    pub unregistered: u32,
}

pub struct Router {
    registered: [bool; SourceTag::COUNT],
    stats: RouterStats,
}

impl Router {
    /// Router with no tags registered.
    pub fn new() -> Self {
        Self {
            registered: [false; SourceTag::COUNT],
            stats: RouterStats::default(),
        }
    }

    /// Router with every tag registered.
    pub fn with_all_routes() -> Self {
        Self {
            registered: [true; SourceTag::COUNT],
            stats: RouterStats::default(),
        }
    }

    pub fn register(&mut self, tag: SourceTag) {
        self.registered[tag.index()] = true;
    }

    pub fn unregister(&mut self, tag: SourceTag) {
        self.registered[tag.index()] = false;
    }

    pub fn is_registered(&self, tag: SourceTag) -> bool {
        self.registered[tag.index()]
    }

    pub fn stats(&self) -> RouterStats {
        self.stats
    }

    /// Deliver one message to its handler.
    pub fn route(
        &mut self,
        message: &Message,
        handlers: &mut impl MessageHandlers,
        sink: &mut impl EventSink,
    ) {
        let tag = message.tag();
        if !self.is_registered(tag) {
            self.stats.unregistered = self.stats.unregistered.saturating_add(1);
            warn!("Router: no handler for {:?}, message dropped", tag);
            sink.emit(&GaugeEvent::FrameDropped(Error::UnknownTag(tag)));
            return;
        }

        debug!("Router: {:?}", message);
        match *message {
            Message::Canbus(t) | Message::Gps(t) | Message::OilPressure(t) | Message::Fuel(t) => {
                handlers.on_telemetry(tag, t, sink);
            }
            Message::Buttons(press) => handlers.on_button(press, sink),
            Message::SetChannel(channel) => handlers.on_channel(channel, sink),
            Message::Startup(live) | Message::Online(live) => handlers.on_link(tag, live, sink),
        }
        self.stats.routed = self.stats.routed.saturating_add(1);
    }

    /// Decode a raw frame and route it.  Malformed frames are logged,
    /// counted and dropped; they never reach a handler.
    pub fn route_frame(
        &mut self,
        bytes: &[u8],
        handlers: &mut impl MessageHandlers,
        sink: &mut impl EventSink,
    ) {
        match codec::decode(bytes) {
            Ok(message) => self.route(&message, handlers, sink),
            Err(e) => {
                self.stats.malformed = self.stats.malformed.saturating_add(1);
                warn!("Router: dropping frame {:02x?}: {}", bytes, e);
                sink.emit(&GaugeEvent::FrameDropped(Error::Malformed(e)));
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_all_routes()
    }
}
