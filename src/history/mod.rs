use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::sensor::{sample_frame, SensorFrame};

/// One synthesized hourly observation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub sensors: SensorFrame,
    /// Estimated daily growth rate at that hour (fraction of body weight)
    pub growth_rate: f64,
}

/// Backfill `days` of hourly points, oldest first, ending one hour before
/// `end`.
///
/// `end` is a parameter rather than the wall clock so a seeded generator
/// yields a fully reproducible series.
pub fn backfill(days: u32, end: DateTime<Utc>, rng: &mut impl Rng) -> Vec<HistoryPoint> {
    let hours = i64::from(days) * 24;

    (0..hours)
        .map(|i| HistoryPoint {
            timestamp: end - Duration::hours(hours - i),
            sensors: sample_frame(rng),
            growth_rate: rng.gen_range(0.02..=0.03),
        })
        .collect()
}
