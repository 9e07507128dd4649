//! Wireless link data interchange.
//!
//! ```text
//!   receive callback ──▶ FrameInbox ──▶ codec::decode ──▶ Message
//! ```
//!
//! The transport itself lives outside this crate; it hands us raw frames.

pub mod codec;
pub mod inbox;
pub mod message;

pub use codec::{Frame, decode, encode};
pub use inbox::FrameInbox;
pub use message::{Button, ButtonPress, Channel, Message, PressType, SourceTag, Telemetry};
