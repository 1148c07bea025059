use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SensorFrame;

/// Draw one synthetic frame with bounded variance around realistic
/// baselines for a shrimp/seaweed co-culture tank.
///
/// Successive draws are independent; no temporal correlation between frames
/// is modeled. Every sensor always gets a value.
pub fn sample_frame(rng: &mut impl Rng) -> SensorFrame {
    SensorFrame {
        temperature: rng.gen_range(27.0..=29.0),
        ph: rng.gen_range(7.6..=8.0),
        dissolved_oxygen: rng.gen_range(5.0..=6.5),
        ammonia: rng.gen_range(0.02..=0.10),
        nitrite: rng.gen_range(0.10..=0.25),
        nitrate: rng.gen_range(15.0..=25.0),
        salinity: rng.gen_range(25.0..=28.0),
        turbidity: rng.gen_range(10.0..=15.0),
        tan: rng.gen_range(0.5..=0.8),
    }
}

/// Synthetic sensor source owning its random generator.
///
/// Seedable so tests can assert exact frames instead of ranges.
pub struct SensorSampler {
    rng: StdRng,
}

impl SensorSampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Sampler with a fixed seed (deterministic frame sequence).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh frame.
    pub fn sample(&mut self) -> SensorFrame {
        sample_frame(&mut self.rng)
    }
}

impl Default for SensorSampler {
    fn default() -> Self {
        Self::new()
    }
}
