//! Typed link messages.
//!
//! Every frame on the wireless link starts with a [`SourceTag`].  The tag
//! fixes the payload shape, so a [`Message`] is a closed sum type with one
//! variant per tag and `decode` can match exhaustively.
//!
//! Senders transmit at a fixed cadence whether or not anything changed.
//! Button and channel payloads carry a liveness flag on the wire; a cleared
//! flag decodes to `None` ("nothing new this cycle") so consumers can never
//! mistake it for a real event.

use crate::gauge::metric::Metric;

/// Source tag, the first byte of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SourceTag {
    Canbus      = 0,
    Gps         = 1,
    Buttons     = 2,
    OilPressure = 3,
    Startup     = 4,
    SetChannel  = 5,
    Fuel        = 6,
    Online      = 7,
}

impl SourceTag {
    pub const COUNT: usize = 8;

    pub const ALL: [SourceTag; Self::COUNT] = [
        Self::Canbus,
        Self::Gps,
        Self::Buttons,
        Self::OilPressure,
        Self::Startup,
        Self::SetChannel,
        Self::Fuel,
        Self::Online,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// One telemetry sample.  `value: None` means the sender has no data.
/// A NaN value carries the same meaning and is folded into `None` by
/// [`Telemetry::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub metric: Metric,
    pub value: Option<f32>,
}

impl Telemetry {
    pub fn new(metric: Metric, value: f32) -> Self {
        Self {
            metric,
            value: (!value.is_nan()).then_some(value),
        }
    }

    pub fn no_data(metric: Metric) -> Self {
        Self { metric, value: None }
    }
}

/// Console buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    Setting        = 0,
    Mode           = 1,
    BrightnessUp   = 2,
    BrightnessDown = 3,
}

impl Button {
    pub fn from_id(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Setting),
            1 => Some(Self::Mode),
            2 => Some(Self::BrightnessUp),
            3 => Some(Self::BrightnessDown),
            _ => None,
        }
    }
}

/// Gesture reported by the button sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PressType {
    Click  = 0,
    Double = 1,
    Hold   = 2,
}

impl PressType {
    pub fn from_id(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Click),
            1 => Some(Self::Double),
            2 => Some(Self::Hold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPress {
    pub button: Button,
    pub press: PressType,
}

/// Gauge screens the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Channel {
    Speedo   = 0,
    Levels   = 1,
    Location = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Self::Speedo, Self::Levels, Self::Location];

    pub fn from_id(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Next screen, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.id() as usize + 1) % Self::ALL.len()]
    }

    /// Previous screen, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.id() as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Decoded link message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Canbus(Telemetry),
    Gps(Telemetry),
    Buttons(Option<ButtonPress>),
    OilPressure(Telemetry),
    /// Remote sender booted (flag set) or nothing to report.
    Startup(bool),
    SetChannel(Option<Channel>),
    Fuel(Telemetry),
    /// Heartbeat: `true` while the remote sender reports itself online.
    Online(bool),
}

impl Message {
    pub fn tag(&self) -> SourceTag {
        match self {
            Self::Canbus(_) => SourceTag::Canbus,
            Self::Gps(_) => SourceTag::Gps,
            Self::Buttons(_) => SourceTag::Buttons,
            Self::OilPressure(_) => SourceTag::OilPressure,
            Self::Startup(_) => SourceTag::Startup,
            Self::SetChannel(_) => SourceTag::SetChannel,
            Self::Fuel(_) => SourceTag::Fuel,
            Self::Online(_) => SourceTag::Online,
        }
    }
}
