//! Monitored metrics and their wire ids.
//!
//! The metric id is the second byte of every telemetry frame.  Ids are
//! stable — append new metrics at the end, never renumber.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Metric {
    // ── CAN bus ───────────────────────────────────────────
    Speed          = 0,
    Rpm            = 1,
    CoolantTemp    = 2,
    IntakeTemp     = 3,
    BatteryVoltage = 4,

    // ── Dedicated senders ─────────────────────────────────
    OilPressure    = 5,
    OilTemp        = 6,
    FuelLevel      = 7,

    // ── GPS ───────────────────────────────────────────────
    GpsSpeed       = 8,
    Latitude       = 9,
    Longitude      = 10,
    Altitude       = 11,
}

impl Metric {
    /// Number of metrics; sizes the per-metric tables.
    pub const COUNT: usize = 12;

    /// All metrics in wire-id order.
    pub const ALL: [Metric; Self::COUNT] = [
        Self::Speed,
        Self::Rpm,
        Self::CoolantTemp,
        Self::IntakeTemp,
        Self::BatteryVoltage,
        Self::OilPressure,
        Self::OilTemp,
        Self::FuelLevel,
        Self::GpsSpeed,
        Self::Latitude,
        Self::Longitude,
        Self::Altitude,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Table index for per-metric arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_id(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Stable snake_case name, matching the configuration file.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Rpm => "rpm",
            Self::CoolantTemp => "coolant_temp",
            Self::IntakeTemp => "intake_temp",
            Self::BatteryVoltage => "battery_voltage",
            Self::OilPressure => "oil_pressure",
            Self::OilTemp => "oil_temp",
            Self::FuelLevel => "fuel_level",
            Self::GpsSpeed => "gps_speed",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Altitude => "altitude",
        }
    }
}
