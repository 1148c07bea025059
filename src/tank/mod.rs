use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod monitor;
mod store;

pub use monitor::{run_refresh_loop, Monitor};
pub use store::TankStore;

#[cfg(test)]
mod tests;

use crate::config::TankConfig;
use crate::sensor::{health_score, Sensor, SensorFrame};

/// Alert severity shown in the alerts panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Warning,
    Critical,
}

/// A raised condition on the tank.
///
/// Alerts are never deleted; `acknowledged` flips to true at most once and
/// never reverts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    /// Sensor that tripped the alert, when one did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<Sensor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}

/// Alert fields supplied by the caller. The store synthesizes the id and
/// timestamp when the alert is raised.
#[derive(Clone, Debug)]
pub struct NewAlert {
    pub kind: AlertKind,
    pub message: String,
    pub sensor: Option<Sensor>,
    pub value: Option<f64>,
    pub threshold: Option<f64>,
}

impl NewAlert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            sensor: None,
            value: None,
            threshold: None,
        }
    }

    /// Attach the reading and threshold that tripped the alert.
    pub fn with_reading(mut self, sensor: Sensor, value: f64, threshold: f64) -> Self {
        self.sensor = Some(sensor);
        self.value = Some(value);
        self.threshold = Some(threshold);
        self
    }
}

/// Aggregate state for one production tank.
///
/// Owned exclusively by [`TankStore`]; consumers read cloned snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankState {
    pub id: String,
    pub name: String,
    pub sensors: SensorFrame,
    pub shrimp_count: u32,
    /// Average shrimp weight (grams)
    pub shrimp_avg_weight: f64,
    /// Days since stocking
    pub shrimp_age: u32,
    /// Cultivated seaweed biomass (kg)
    pub seaweed_biomass: f64,
    pub last_updated: DateTime<Utc>,
    /// Derived from `sensors`; never set directly
    pub health_score: u8,
    /// Newest first
    pub alerts: Vec<Alert>,
}

impl TankState {
    /// State built from configured identity and stocking figures, with the
    /// health score derived from `frame`.
    pub fn from_config(config: &TankConfig, frame: SensorFrame) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone(),
            sensors: frame,
            shrimp_count: config.shrimp_count,
            shrimp_avg_weight: config.shrimp_avg_weight,
            shrimp_age: config.shrimp_age,
            seaweed_biomass: config.seaweed_biomass,
            last_updated: Utc::now(),
            health_score: health_score(&frame),
            alerts: Vec::new(),
        }
    }

    /// `from_config` plus the alerts a fresh demo tank ships with.
    pub fn seeded(config: &TankConfig, frame: SensorFrame) -> Self {
        let mut state = Self::from_config(config, frame);
        state.alerts = demo_alerts();
        state
    }
}

/// Pre-loaded demo alerts: a live dissolved-oxygen warning and an already
/// acknowledged feeding notice.
fn demo_alerts() -> Vec<Alert> {
    let now = Utc::now();

    vec![
        Alert {
            id: Uuid::now_v7(),
            kind: AlertKind::Warning,
            message: "Dissolved oxygen trending lower".to_string(),
            sensor: Some(Sensor::DissolvedOxygen),
            value: Some(4.8),
            threshold: Some(5.0),
            timestamp: now - Duration::hours(1),
            acknowledged: false,
        },
        Alert {
            id: Uuid::now_v7(),
            kind: AlertKind::Info,
            message: "Feeding schedule completed".to_string(),
            sensor: None,
            value: None,
            threshold: None,
            timestamp: now - Duration::hours(2),
            acknowledged: true,
        },
    ]
}

/// State-change message broadcast to subscribers after each refresh.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TankUpdate {
    pub tank_id: String,
    pub sensors: SensorFrame,
    pub health_score: u8,
    pub timestamp: DateTime<Utc>,
}
