//! Unified error types for the gauge core.
//!
//! A single `Error` enum that every subsystem converts into, so boot code
//! handles failures uniformly.  All variants are `Copy` so they can be passed
//! through the router and service without allocation.
//!
//! | Error              | Raised by                | Policy                      |
//! |--------------------|--------------------------|-----------------------------|
//! | `ConfigError`      | threshold / config build | fatal, aborts boot          |
//! | `MalformedMessage` | `link::codec::decode`    | frame dropped and logged    |
//! | `UnknownTag`       | `app::router::Router`    | message dropped and logged  |

use core::fmt;

use crate::gauge::metric::Metric;
use crate::link::message::SourceTag;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A threshold model or the configuration table is invalid.
    Config(ConfigError),
    /// A link frame could not be decoded.
    Malformed(MalformedMessage),
    /// A message arrived for a tag with no registered handler.
    UnknownTag(SourceTag),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Malformed(e) => write!(f, "malformed message: {e}"),
            Self::UnknownTag(tag) => write!(f, "no handler registered for {tag:?}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min` is greater than `max`.
    InvertedRange(Metric),
    /// `min` or `max` is NaN or infinite.
    NonFiniteRange(Metric),
    /// The alert threshold is NaN/infinite or outside `[min, max]`.
    AlertOutOfRange(Metric),
    /// The warning threshold is NaN/infinite or outside `[min, max]`.
    WarningOutOfRange(Metric),
    /// Unit label is longer than three characters.
    UnitTooLong(Metric),
    /// The same metric appears twice in the threshold table.
    DuplicateMetric(Metric),
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// The config source could not be parsed.
    Parse(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange(m) => write!(f, "{}: min is greater than max", m.name()),
            Self::NonFiniteRange(m) => write!(f, "{}: range bounds must be finite", m.name()),
            Self::AlertOutOfRange(m) => write!(f, "{}: alert outside [min, max]", m.name()),
            Self::WarningOutOfRange(m) => write!(f, "{}: warning outside [min, max]", m.name()),
            Self::UnitTooLong(m) => write!(f, "{}: unit longer than 3 characters", m.name()),
            Self::DuplicateMetric(m) => write!(f, "{}: configured more than once", m.name()),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Parse(msg) => write!(f, "parse failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Link frame errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedMessage {
    /// Zero-length frame.
    Empty,
    /// First byte is not a known source tag.
    UnknownTag(u8),
    /// Frame length does not match the shape of its tag.
    BadLength { tag: SourceTag, expected: usize, actual: usize },
    /// Liveness flag byte is neither 0 nor 1.
    BadFlag(u8),
    /// Telemetry metric id is not in the metric table.
    UnknownMetric(u8),
    /// Button id is out of range.
    UnknownButton(u8),
    /// Press type is out of range.
    UnknownPress(u8),
    /// Channel id is out of range.
    UnknownChannel(u8),
}

impl fmt::Display for MalformedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty frame"),
            Self::UnknownTag(raw) => write!(f, "unknown source tag {raw}"),
            Self::BadLength {
                tag,
                expected,
                actual,
            } => write!(f, "{tag:?} frame is {actual} bytes, expected {expected}"),
            Self::BadFlag(raw) => write!(f, "invalid liveness flag {raw}"),
            Self::UnknownMetric(raw) => write!(f, "unknown metric id {raw}"),
            Self::UnknownButton(raw) => write!(f, "unknown button id {raw}"),
            Self::UnknownPress(raw) => write!(f, "unknown press type {raw}"),
            Self::UnknownChannel(raw) => write!(f, "unknown channel id {raw}"),
        }
    }
}

impl core::error::Error for MalformedMessage {}

impl From<MalformedMessage> for Error {
    fn from(e: MalformedMessage) -> Self {
        Self::Malformed(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
