// Sensor model, sampling and health scoring
pub mod sensor;

// Tank state store and refresh loop
pub mod tank;

// Actuator and simulation settings
pub mod control;

// Grow-out forecast generator
pub mod forecast;

// Synthetic history backfill
pub mod history;

// Rule-derived advisories
pub mod insight;

// Configuration
pub mod config;
