use rand::Rng;
use serde::Serialize;

/// Days of measured growth available before the model takes over.
const OBSERVED_DAYS: u32 = 45;

/// Post-larva baseline weight (grams).
const BASELINE_WEIGHT_G: f64 = 0.1;

/// Daily compound growth factor used by the forecast.
const PREDICTED_DAILY_GROWTH: f64 = 1.05;

/// Daily compound growth factor observed in measurements. Slightly under
/// the forecast, so the curves visibly diverge past the observed window.
const OBSERVED_DAILY_GROWTH: f64 = 1.048;

/// Predicted (and, where measured, observed) shrimp weight for one day of
/// the grow-out cycle.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    /// 1-based day of the cycle
    pub day: u32,
    /// Model-predicted average weight (grams)
    pub predicted_weight: f64,
    /// Measured average weight, present only for days already sampled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f64>,
    pub confidence: f64,
}

/// Synthesize a grow-out curve of `days` points.
///
/// Weight compounds daily off the post-larva baseline with uniform noise on
/// top; the observed series stops after [`OBSERVED_DAYS`].
pub fn growth_curve(days: u32, rng: &mut impl Rng) -> Vec<GrowthPoint> {
    (1..=days)
        .map(|day| {
            let exp = (day - 1) as i32;
            let actual_weight = if day <= OBSERVED_DAYS {
                Some(BASELINE_WEIGHT_G * OBSERVED_DAILY_GROWTH.powi(exp) + rng.gen_range(0.0..=0.3))
            } else {
                None
            };

            GrowthPoint {
                day,
                predicted_weight: BASELINE_WEIGHT_G * PREDICTED_DAILY_GROWTH.powi(exp)
                    + rng.gen_range(0.0..=0.5),
                actual_weight,
                confidence: rng.gen_range(0.85..=0.95),
            }
        })
        .collect()
}
