use serde::{Deserialize, Serialize};

use super::Sensor;

/// Health category for a single reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Warning,
    Critical,
}

/// Inclusive numeric band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Containment, inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Classification bands for one sensor. The warning band is a superset of
/// the optimal band.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdRule {
    pub optimal: Band,
    pub warning: Band,
}

impl ThresholdRule {
    /// Bands for `sensor`. Exhaustive over the enum, so an unconfigured
    /// sensor cannot reach classification.
    pub const fn for_sensor(sensor: Sensor) -> ThresholdRule {
        match sensor {
            Sensor::Temperature => ThresholdRule {
                optimal: Band::new(27.0, 30.0),
                warning: Band::new(25.0, 32.0),
            },
            Sensor::Ph => ThresholdRule {
                optimal: Band::new(7.5, 8.5),
                warning: Band::new(7.0, 9.0),
            },
            Sensor::DissolvedOxygen => ThresholdRule {
                optimal: Band::new(5.0, 8.0),
                warning: Band::new(4.0, 10.0),
            },
            Sensor::Ammonia => ThresholdRule {
                optimal: Band::new(0.0, 0.05),
                warning: Band::new(0.0, 0.1),
            },
            Sensor::Nitrite => ThresholdRule {
                optimal: Band::new(0.0, 0.2),
                warning: Band::new(0.0, 0.5),
            },
            Sensor::Nitrate => ThresholdRule {
                optimal: Band::new(0.0, 20.0),
                warning: Band::new(0.0, 40.0),
            },
            Sensor::Salinity => ThresholdRule {
                optimal: Band::new(24.0, 28.0),
                warning: Band::new(20.0, 32.0),
            },
            Sensor::Turbidity => ThresholdRule {
                optimal: Band::new(0.0, 15.0),
                warning: Band::new(0.0, 25.0),
            },
            Sensor::Tan => ThresholdRule {
                optimal: Band::new(0.0, 0.5),
                warning: Band::new(0.0, 1.0),
            },
        }
    }
}

/// Classify a reading against its sensor's bands.
///
/// The optimal band is tested first: it sits inside the warning band, so
/// testing warning first would misreport optimal readings.
pub fn classify(sensor: Sensor, value: f64) -> Status {
    let rule = ThresholdRule::for_sensor(sensor);

    if rule.optimal.contains(value) {
        Status::Optimal
    } else if rule.warning.contains(value) {
        Status::Warning
    } else {
        Status::Critical
    }
}
