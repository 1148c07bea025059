use anyhow::{Context, Result};
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Complete tidewatch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TidewatchConfig {
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub tank: TankConfig,
}

impl Default for TidewatchConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            tank: TankConfig::default(),
        }
    }
}

impl TidewatchConfig {
    /// Apply `TIDEWATCH_*` env overrides on top of file/default values.
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("TIDEWATCH_REFRESH_INTERVAL_MS") {
            if let Ok(n) = v.parse::<u64>() {
                self.monitor.refresh_interval_ms = n;
            }
        }
        if let Ok(v) = std::env::var("TIDEWATCH_CONNECTED") {
            if let Ok(b) = v.parse::<bool>() {
                self.monitor.connected = b;
            }
        }
    }
}

/// Refresh loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// How often to draw a new sensor frame (milliseconds)
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Start with timer-driven refresh enabled
    #[serde(default = "default_connected")]
    pub connected: bool,
}

fn default_refresh_interval_ms() -> u64 {
    5000
}

fn default_connected() -> bool {
    true
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            connected: default_connected(),
        }
    }
}

/// Tank identity and stocking figures
#[derive(Debug, Clone, Deserialize)]
pub struct TankConfig {
    #[serde(default = "default_tank_id")]
    pub id: String,

    #[serde(default = "default_tank_name")]
    pub name: String,

    #[serde(default = "default_shrimp_count")]
    pub shrimp_count: u32,

    /// Average shrimp weight at last assessment (grams)
    #[serde(default = "default_shrimp_avg_weight")]
    pub shrimp_avg_weight: f64,

    /// Days since stocking
    #[serde(default = "default_shrimp_age")]
    pub shrimp_age: u32,

    /// Cultivated seaweed biomass (kg)
    #[serde(default = "default_seaweed_biomass")]
    pub seaweed_biomass: f64,
}

fn default_tank_id() -> String {
    "tank-001".to_string()
}

fn default_tank_name() -> String {
    "Main Production Tank".to_string()
}

fn default_shrimp_count() -> u32 {
    15_000
}

fn default_shrimp_avg_weight() -> f64 {
    12.5
}

fn default_shrimp_age() -> u32 {
    45
}

fn default_seaweed_biomass() -> f64 {
    125.0
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            id: default_tank_id(),
            name: default_tank_name(),
            shrimp_count: default_shrimp_count(),
            shrimp_avg_weight: default_shrimp_avg_weight(),
            shrimp_age: default_shrimp_age(),
            seaweed_biomass: default_seaweed_biomass(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<TidewatchConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config = toml::from_str(&contents).context("Failed to parse config file")?;
    Ok(config)
}
