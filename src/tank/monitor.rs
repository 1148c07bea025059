use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::TankStore;

/// Periodically refresh the store while connectivity is enabled.
///
/// Ticks are serialized by the runtime's timer queue; a tick that lands
/// while the tank is disconnected is observed but mutates nothing. Runs
/// until the owning task is cancelled.
pub async fn run_refresh_loop(store: Arc<TankStore>, interval_ms: u64) {
    info!(interval_ms, "Starting refresh loop");

    let mut ticker = interval(Duration::from_millis(interval_ms));

    // Skip missed ticks to prevent backlog under load
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        if !store.is_connected() {
            debug!("Tick skipped, tank disconnected");
            continue;
        }

        let update = store.refresh();
        debug!(health_score = update.health_score, "Sensor frame refreshed");
    }
}

/// Handle for the background refresh task.
///
/// The timer is a scoped resource: stopping (or dropping) the handle aborts
/// the task, so a torn-down monitor can never keep mutating state nobody
/// observes.
pub struct Monitor {
    handle: JoinHandle<()>,
}

impl Monitor {
    /// Spawn the refresh loop for `store`.
    pub fn start(store: Arc<TankStore>, interval_ms: u64) -> Self {
        let handle = tokio::spawn(run_refresh_loop(store, interval_ms));
        Self { handle }
    }

    /// Cancel the refresh loop.
    pub fn stop(self) {
        self.handle.abort();
        info!("Refresh loop stopped");
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
