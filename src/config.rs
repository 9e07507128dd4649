//! Dashboard configuration
//!
//! The threshold table and power-on display settings.  The compiled-in
//! [`GaugeConfig::default`] matches the stock gauge cluster; a JSON file or
//! a postcard blob flashed next to the firmware can replace it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gauge::metric::Metric;
use crate::gauge::threshold::{Direction, ThresholdModel, ThresholdTable};
use crate::link::message::Channel;

/// Dimmest dimmer level (0 = full brightness).
pub const DIMMER_MAX: u8 = 9;

/// Serialized form of one [`ThresholdModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub metric: Metric,
    pub min: f32,
    pub max: f32,
    /// Omit (or `null`) to disable the alert cutoff.
    #[serde(default)]
    pub alert: Option<f32>,
    /// Omit (or `null`) to disable the warning cutoff.
    #[serde(default)]
    pub warning: Option<f32>,
    pub direction: Direction,
    pub unit: String,
}

impl ThresholdConfig {
    fn new(
        metric: Metric,
        (min, max): (f32, f32),
        alert: Option<f32>,
        warning: Option<f32>,
        direction: Direction,
        unit: &str,
    ) -> Self {
        Self {
            metric,
            min,
            max,
            alert,
            warning,
            direction,
            unit: unit.into(),
        }
    }

    /// Validate into an immutable model.
    pub fn build(&self) -> Result<ThresholdModel, ConfigError> {
        ThresholdModel::new(
            self.metric,
            self.min,
            self.max,
            self.alert,
            self.warning,
            self.direction,
            &self.unit,
        )
    }
}

/// Core dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    // --- Thresholds ---
    /// One entry per monitored metric.
    pub thresholds: Vec<ThresholdConfig>,

    // --- Display ---
    /// Screen shown at power-on.
    #[serde(default = "default_channel")]
    pub default_channel: Channel,
    /// Dimmer level at power-on (0-9).
    #[serde(default)]
    pub default_dimmer: u8,
}

fn default_channel() -> Channel {
    Channel::Speedo
}

impl Default for GaugeConfig {
    fn default() -> Self {
        use Direction::{Above, Below};
        use Metric::{
            Altitude, BatteryVoltage, CoolantTemp, FuelLevel, GpsSpeed, IntakeTemp, Latitude,
            Longitude, OilPressure, OilTemp, Rpm, Speed,
        };

        let t = ThresholdConfig::new;
        Self {
            thresholds: vec![
                // CAN bus
                t(Speed, (0.0, 260.0), None, None, Above, "kmh"),
                t(Rpm, (0.0, 8000.0), Some(6800.0), Some(6000.0), Above, "rpm"),
                t(CoolantTemp, (-40.0, 150.0), Some(115.0), Some(105.0), Above, "\u{00b0}C"),
                t(IntakeTemp, (-40.0, 100.0), Some(65.0), Some(50.0), Above, "\u{00b0}C"),
                t(BatteryVoltage, (8.0, 16.0), Some(11.8), Some(12.2), Below, "V"),
                // Dedicated senders
                t(OilPressure, (0.0, 100.0), Some(10.0), Some(20.0), Below, "psi"),
                t(OilTemp, (-40.0, 160.0), Some(135.0), Some(120.0), Above, "\u{00b0}C"),
                t(FuelLevel, (0.0, 100.0), Some(5.0), Some(15.0), Below, "%"),
                // GPS
                t(GpsSpeed, (0.0, 260.0), None, None, Above, "kmh"),
                t(Latitude, (-90.0, 90.0), None, None, Above, "deg"),
                t(Longitude, (-180.0, 180.0), None, None, Above, "deg"),
                t(Altitude, (-500.0, 9000.0), None, None, Above, "m"),
            ],
            default_channel: Channel::Speedo,
            default_dimmer: 0,
        }
    }
}

impl GaugeConfig {
    /// Parse a JSON config file.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| {
            log::warn!("Config JSON rejected: {}", e);
            ConfigError::Parse("invalid JSON config")
        })
    }

    /// Decode a postcard config blob.
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|e| {
            log::warn!("Config blob rejected: {}", e);
            ConfigError::Parse("invalid config blob")
        })
    }

    /// Encode as a postcard blob.
    pub fn to_postcard(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Parse("config not encodable"))
    }

    /// Validate every entry and build the runtime threshold table.
    pub fn build_table(&self) -> Result<ThresholdTable, ConfigError> {
        if self.default_dimmer > DIMMER_MAX {
            return Err(ConfigError::ValidationFailed("default_dimmer must be 0-9"));
        }
        let mut table = ThresholdTable::new();
        for entry in &self.thresholds {
            table.insert(entry.build()?)?;
        }
        Ok(table)
    }

    /// Validate without keeping the table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_table().map(|_| ())
    }
}
