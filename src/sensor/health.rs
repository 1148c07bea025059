use super::{classify, Sensor, SensorFrame, Status};

/// Score subtracted per sensor in warning state.
const WARNING_PENALTY: i32 = 5;

/// Score subtracted per sensor in critical state.
const CRITICAL_PENALTY: i32 = 15;

/// Aggregate 0-100 health score for a frame.
///
/// Starts at 100 and subtracts a fixed penalty per non-optimal sensor.
/// Clamped at both ends; deterministic for a given frame.
pub fn health_score(frame: &SensorFrame) -> u8 {
    let mut score: i32 = 100;

    for sensor in Sensor::ALL {
        match classify(sensor, frame.get(sensor)) {
            Status::Optimal => {}
            Status::Warning => score -= WARNING_PENALTY,
            Status::Critical => score -= CRITICAL_PENALTY,
        }
    }

    score.clamp(0, 100) as u8
}
