use serde::{Deserialize, Serialize};

/// Phase of the tidal simulation cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TidalPhase {
    High,
    Low,
    Rising,
    Falling,
}

/// One slot in the daily feeding schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSlot {
    pub id: String,
    /// 24h wall-clock time, "HH:MM"
    pub time: String,
    /// Feed amount (grams)
    pub amount: u32,
    #[serde(rename = "type")]
    pub feed_type: String,
    pub enabled: bool,
}

/// Actuator and simulation settings for the tank.
///
/// Replaced wholesale through the store, same discipline as the sensor
/// frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSettings {
    pub aerator_enabled: bool,
    /// Percent of maximum aerator speed
    pub aerator_speed: u8,
    pub wave_simulation: bool,
    /// Percent of maximum wave generator output
    pub wave_intensity: u8,
    pub feeding_schedule: Vec<FeedingSlot>,
    pub tidal_simulation: bool,
    pub tidal_phase: TidalPhase,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            aerator_enabled: true,
            aerator_speed: 75,
            wave_simulation: true,
            wave_intensity: 60,
            feeding_schedule: vec![
                FeedingSlot {
                    id: "feed-1".to_string(),
                    time: "06:00".to_string(),
                    amount: 250,
                    feed_type: "Starter Feed".to_string(),
                    enabled: true,
                },
                FeedingSlot {
                    id: "feed-2".to_string(),
                    time: "12:00".to_string(),
                    amount: 300,
                    feed_type: "Growth Feed".to_string(),
                    enabled: true,
                },
                FeedingSlot {
                    id: "feed-3".to_string(),
                    time: "18:00".to_string(),
                    amount: 280,
                    feed_type: "Growth Feed".to_string(),
                    enabled: true,
                },
                FeedingSlot {
                    id: "feed-4".to_string(),
                    time: "22:00".to_string(),
                    amount: 150,
                    feed_type: "Night Feed".to_string(),
                    enabled: false,
                },
            ],
            tidal_simulation: true,
            tidal_phase: TidalPhase::Rising,
        }
    }
}
