use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::sensor::{classify, Sensor, SensorFrame, Status, ThresholdRule};

/// Advisory category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Prediction,
    Recommendation,
    Warning,
    Analysis,
}

/// A generated advisory shown on the insights screen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub actionable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Insight {
    fn new(
        kind: InsightKind,
        title: &str,
        description: String,
        confidence: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind,
            title: title.to_string(),
            description,
            confidence,
            timestamp,
            actionable: false,
            action: None,
        }
    }

    fn with_action(mut self, action: &str) -> Self {
        self.actionable = true;
        self.action = Some(action.to_string());
        self
    }
}

/// How close (in °C) temperature may get to the optimal ceiling before a
/// warning advisory fires.
const TEMPERATURE_HEADROOM_C: f64 = 1.0;

/// Derive advisories from the current frame.
///
/// Rules mirror what tank operators actually act on: aeration when
/// dissolved oxygen sags, cooling when temperature crowds the ceiling, and
/// a nutrient-uptake note when the water chemistry is fully optimal.
pub fn advisories(frame: &SensorFrame, now: DateTime<Utc>) -> Vec<Insight> {
    let mut out = Vec::new();

    if classify(Sensor::DissolvedOxygen, frame.dissolved_oxygen) != Status::Optimal {
        out.push(
            Insight::new(
                InsightKind::Recommendation,
                "Increase Aeration",
                format!(
                    "Dissolved oxygen at {:.1} mg/L is outside the optimal band. \
                     Recommend increasing aerator speed by 15% during peak feeding hours.",
                    frame.dissolved_oxygen
                ),
                0.92,
                now,
            )
            .with_action("Increase aerator speed"),
        );
    }

    let ceiling = ThresholdRule::for_sensor(Sensor::Temperature).optimal.hi;
    if frame.temperature > ceiling - TEMPERATURE_HEADROOM_C {
        out.push(
            Insight::new(
                InsightKind::Warning,
                "Temperature Alert",
                format!(
                    "Temperature at {:.1} \u{b0}C is approaching the upper threshold of \
                     {:.0} \u{b0}C. Consider activating the cooling system if ambient \
                     temperature continues to rise.",
                    frame.temperature, ceiling
                ),
                0.78,
                now,
            )
            .with_action("Monitor temperature"),
        );
    }

    let all_optimal = Sensor::ALL
        .iter()
        .all(|&s| classify(s, frame.get(s)) == Status::Optimal);
    if all_optimal {
        out.push(Insight::new(
            InsightKind::Analysis,
            "Seaweed Impact Analysis",
            format!(
                "Water chemistry is fully within optimal bands. Seaweed nutrient \
                 absorption is effectively controlling ammonia at {:.2} mg/L.",
                frame.ammonia
            ),
            0.95,
            now,
        ));
    }

    out
}
