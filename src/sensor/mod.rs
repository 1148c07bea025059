use serde::{Deserialize, Serialize};

mod health;
mod sampler;
mod thresholds;

pub use health::health_score;
pub use sampler::{sample_frame, SensorSampler};
pub use thresholds::{classify, Band, Status, ThresholdRule};


/// Water-quality parameters measured in an IMTA production tank.
///
/// The set is closed: classification rules, labels and units are exhaustive
/// matches over this enum, so a sensor without configuration cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sensor {
    Temperature,
    Ph,
    DissolvedOxygen,
    Ammonia,
    Nitrite,
    Nitrate,
    Salinity,
    Turbidity,
    /// Total ammonia nitrogen
    Tan,
}

impl Sensor {
    /// All sensors, in dashboard display order.
    pub const ALL: [Sensor; 9] = [
        Sensor::Temperature,
        Sensor::Ph,
        Sensor::DissolvedOxygen,
        Sensor::Ammonia,
        Sensor::Nitrite,
        Sensor::Nitrate,
        Sensor::Salinity,
        Sensor::Turbidity,
        Sensor::Tan,
    ];

    /// Human-readable name shown on sensor cards.
    pub fn label(&self) -> &'static str {
        match self {
            Sensor::Temperature => "Temperature",
            Sensor::Ph => "pH Level",
            Sensor::DissolvedOxygen => "Dissolved Oxygen",
            Sensor::Ammonia => "Ammonia (NH\u{2083})",
            Sensor::Nitrite => "Nitrite (NO\u{2082})",
            Sensor::Nitrate => "Nitrate (NO\u{2083})",
            Sensor::Salinity => "Salinity",
            Sensor::Turbidity => "Turbidity",
            Sensor::Tan => "Total Ammonia Nitrogen",
        }
    }

    /// Measurement unit. pH is dimensionless and has none.
    pub fn unit(&self) -> &'static str {
        match self {
            Sensor::Temperature => "\u{b0}C",
            Sensor::Ph => "",
            Sensor::DissolvedOxygen => "mg/L",
            Sensor::Ammonia => "mg/L",
            Sensor::Nitrite => "mg/L",
            Sensor::Nitrate => "mg/L",
            Sensor::Salinity => "ppt",
            Sensor::Turbidity => "NTU",
            Sensor::Tan => "mg/L",
        }
    }
}

/// One set of readings across all nine sensors.
///
/// A frame is immutable once produced: every refresh builds a whole new
/// frame rather than patching readings in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorFrame {
    pub temperature: f64,
    pub ph: f64,
    pub dissolved_oxygen: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub nitrate: f64,
    pub salinity: f64,
    pub turbidity: f64,
    pub tan: f64,
}

impl SensorFrame {
    /// Reading for a single sensor.
    pub fn get(&self, sensor: Sensor) -> f64 {
        match sensor {
            Sensor::Temperature => self.temperature,
            Sensor::Ph => self.ph,
            Sensor::DissolvedOxygen => self.dissolved_oxygen,
            Sensor::Ammonia => self.ammonia,
            Sensor::Nitrite => self.nitrite,
            Sensor::Nitrate => self.nitrate,
            Sensor::Salinity => self.salinity,
            Sensor::Turbidity => self.turbidity,
            Sensor::Tan => self.tan,
        }
    }
}
