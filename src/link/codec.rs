//! Fixed-shape frame codec.
//!
//! Wire formats (multi-byte fields little-endian):
//! ```text
//! telemetry  ┌─────┬────────┬──────────────┐
//!            │ tag │ metric │ value (f32)  │   6 bytes, NaN = no data
//!            └─────┴────────┴──────────────┘
//! buttons    ┌─────┬──────┬────────┬───────┐
//!            │ tag │ flag │ button │ press │   4 bytes
//!            └─────┴──────┴────────┴───────┘
//! channel    ┌─────┬──────┬────────────┐
//!            │ tag │ flag │ channel_id │       3 bytes
//!            └─────┴──────┴────────────┘
//! link       ┌─────┬──────┐
//!            │ tag │ flag │                    2 bytes (Startup, Online)
//!            └─────┴──────┘
//! ```
//!
//! A frame must be exactly the length its tag implies.  With `flag == 0`
//! the trailing bytes are ignored and encoded as zeros.

use core::ops::Deref;

use crate::error::MalformedMessage;
use crate::gauge::metric::Metric;
use crate::link::message::{Button, ButtonPress, Channel, Message, PressType, SourceTag, Telemetry};

/// Largest frame any tag produces, rounded up.
pub const MAX_FRAME_LEN: usize = 8;

const TELEMETRY_LEN: usize = 6;
const BUTTONS_LEN: usize = 4;
const CHANNEL_LEN: usize = 3;
const LINK_LEN: usize = 2;

const FLAG_CLEAR: u8 = 0;
const FLAG_LIVE: u8 = 1;

/// Expected frame length for a tag.
pub const fn frame_len(tag: SourceTag) -> usize {
    match tag {
        SourceTag::Canbus | SourceTag::Gps | SourceTag::OilPressure | SourceTag::Fuel => {
            TELEMETRY_LEN
        }
        SourceTag::Buttons => BUTTONS_LEN,
        SourceTag::SetChannel => CHANNEL_LEN,
        SourceTag::Startup | SourceTag::Online => LINK_LEN,
    }
}

/// An encoded frame held inline (no heap).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    buf: [u8; MAX_FRAME_LEN],
    len: u8,
}

impl Frame {
    /// Copy `bytes` into a frame.  `None` if longer than [`MAX_FRAME_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_FRAME_LEN {
            return None;
        }
        let mut buf = [0u8; MAX_FRAME_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            buf,
            len: bytes.len() as u8,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Frame({:02x?})", self.as_bytes())
    }
}

// ── Decode ────────────────────────────────────────────────────

/// Decode one frame.
pub fn decode(bytes: &[u8]) -> Result<Message, MalformedMessage> {
    let (&raw_tag, _) = bytes.split_first().ok_or(MalformedMessage::Empty)?;
    let tag = SourceTag::from_id(raw_tag).ok_or(MalformedMessage::UnknownTag(raw_tag))?;

    let expected = frame_len(tag);
    if bytes.len() != expected {
        return Err(MalformedMessage::BadLength {
            tag,
            expected,
            actual: bytes.len(),
        });
    }

    let msg = match tag {
        SourceTag::Canbus => Message::Canbus(decode_telemetry(bytes)?),
        SourceTag::Gps => Message::Gps(decode_telemetry(bytes)?),
        SourceTag::OilPressure => Message::OilPressure(decode_telemetry(bytes)?),
        SourceTag::Fuel => Message::Fuel(decode_telemetry(bytes)?),
        SourceTag::Buttons => Message::Buttons(decode_buttons(bytes)?),
        SourceTag::SetChannel => Message::SetChannel(decode_channel(bytes)?),
        SourceTag::Startup => Message::Startup(decode_flag(bytes[1])?),
        SourceTag::Online => Message::Online(decode_flag(bytes[1])?),
    };
    Ok(msg)
}

fn decode_flag(raw: u8) -> Result<bool, MalformedMessage> {
    match raw {
        FLAG_CLEAR => Ok(false),
        FLAG_LIVE => Ok(true),
        other => Err(MalformedMessage::BadFlag(other)),
    }
}

fn decode_telemetry(bytes: &[u8]) -> Result<Telemetry, MalformedMessage> {
    let metric = Metric::from_id(bytes[1]).ok_or(MalformedMessage::UnknownMetric(bytes[1]))?;
    let value = f32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
    Ok(Telemetry {
        metric,
        value: (!value.is_nan()).then_some(value),
    })
}

fn decode_buttons(bytes: &[u8]) -> Result<Option<ButtonPress>, MalformedMessage> {
    if !decode_flag(bytes[1])? {
        return Ok(None);
    }
    let button = Button::from_id(bytes[2]).ok_or(MalformedMessage::UnknownButton(bytes[2]))?;
    let press = PressType::from_id(bytes[3]).ok_or(MalformedMessage::UnknownPress(bytes[3]))?;
    Ok(Some(ButtonPress { button, press }))
}

fn decode_channel(bytes: &[u8]) -> Result<Option<Channel>, MalformedMessage> {
    if !decode_flag(bytes[1])? {
        return Ok(None);
    }
    Channel::from_id(bytes[2])
        .map(Some)
        .ok_or(MalformedMessage::UnknownChannel(bytes[2]))
}

// ── Encode ────────────────────────────────────────────────────

/// Encode a message into its wire frame.
pub fn encode(msg: &Message) -> Frame {
    let tag = msg.tag();
    let len = frame_len(tag);
    let mut buf = [0u8; MAX_FRAME_LEN];
    buf[0] = tag.id();

    match *msg {
        Message::Canbus(t) | Message::Gps(t) | Message::OilPressure(t) | Message::Fuel(t) => {
            buf[1] = t.metric.id();
            buf[2..6].copy_from_slice(&t.value.unwrap_or(f32::NAN).to_le_bytes());
        }
        Message::Buttons(press) => {
            if let Some(p) = press {
                buf[1] = FLAG_LIVE;
                buf[2] = p.button as u8;
                buf[3] = p.press as u8;
            }
        }
        Message::SetChannel(channel) => {
            if let Some(c) = channel {
                buf[1] = FLAG_LIVE;
                buf[2] = c.id();
            }
        }
        Message::Startup(live) | Message::Online(live) => {
            buf[1] = if live { FLAG_LIVE } else { FLAG_CLEAR };
        }
    }

    Frame {
        buf,
        len: len as u8,
    }
}
