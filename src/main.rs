use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use tidewatch::config::{load_config, TidewatchConfig};
use tidewatch::sensor::SensorSampler;
use tidewatch::tank::{Monitor, TankState, TankStore};
use tidewatch::{forecast, history, insight};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidewatch=info".into()),
        )
        .init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => TidewatchConfig::default(),
    };
    config.apply_env();

    info!(
        tank = %config.tank.name,
        interval_ms = config.monitor.refresh_interval_ms,
        "Tidewatch starting"
    );

    let mut sampler = SensorSampler::new();
    let initial = TankState::seeded(&config.tank, sampler.sample());
    let store = Arc::new(TankStore::new(initial, sampler));
    store.set_connected(config.monitor.connected);

    // Series the dashboard charts render before live data arrives
    let mut rng = StdRng::from_entropy();
    let backfill = history::backfill(7, Utc::now(), &mut rng);
    let growth = forecast::growth_curve(90, &mut rng);
    info!(
        history_points = backfill.len(),
        forecast_days = growth.len(),
        "Synthesized dashboard series"
    );

    let mut updates = store.subscribe();
    let monitor = Monitor::start(Arc::clone(&store), config.monitor.refresh_interval_ms);

    let log_task = tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            info!(
                health_score = update.health_score,
                "Frame updated: temp {:.1} C, DO {:.1} mg/L, pH {:.2}",
                update.sensors.temperature,
                update.sensors.dissolved_oxygen,
                update.sensors.ph
            );

            for advisory in insight::advisories(&update.sensors, update.timestamp) {
                debug!(kind = ?advisory.kind, "{}", advisory.title);
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    monitor.stop();
    log_task.abort();

    Ok(())
}
