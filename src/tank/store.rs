use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use crate::control::ControlSettings;
use crate::sensor::{health_score, SensorSampler};

use super::{Alert, NewAlert, TankState, TankUpdate};

/// Owns the live state for a single tank.
///
/// All mutation goes through the store; readers get cloned snapshots. The
/// sensor frame, `last_updated` and `health_score` are replaced together
/// under one write lock, so no reader can observe a fresh frame paired with
/// a stale score or timestamp.
pub struct TankStore {
    state: RwLock<TankState>,
    controls: RwLock<ControlSettings>,
    sampler: Mutex<SensorSampler>,
    connected: AtomicBool,
    update_tx: broadcast::Sender<TankUpdate>,
}

impl TankStore {
    /// Store holding `initial` state, drawing refreshes from `sampler`.
    /// Starts connected.
    pub fn new(initial: TankState, sampler: SensorSampler) -> Self {
        let (update_tx, _) = broadcast::channel(64);

        Self {
            state: RwLock::new(initial),
            controls: RwLock::new(ControlSettings::default()),
            sampler: Mutex::new(sampler),
            connected: AtomicBool::new(true),
            update_tx,
        }
    }

    /// Read-only snapshot of the current tank state.
    pub fn state(&self) -> TankState {
        self.state.read().unwrap().clone()
    }

    /// Draw a new sensor frame and fold it into the tank state.
    ///
    /// Always succeeds. The returned update mirrors exactly what the held
    /// state now contains.
    pub fn refresh(&self) -> TankUpdate {
        let frame = self.sampler.lock().unwrap().sample();
        let score = health_score(&frame);
        let now = Utc::now();

        let update = {
            let mut state = self.state.write().unwrap();
            state.sensors = frame;
            state.last_updated = now;
            state.health_score = score;

            TankUpdate {
                tank_id: state.id.clone(),
                sensors: frame,
                health_score: score,
                timestamp: now,
            }
        };

        // No subscribers is fine
        let _ = self.update_tx.send(update.clone());

        update
    }

    /// Mark the alert with `alert_id` acknowledged.
    ///
    /// Idempotent: unknown ids and already-acknowledged alerts are no-ops.
    /// Returns whether an alert actually flipped.
    pub fn acknowledge_alert(&self, alert_id: Uuid) -> bool {
        let mut state = self.state.write().unwrap();

        match state.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) if !alert.acknowledged => {
                alert.acknowledged = true;
                info!(alert_id = %alert_id, "Alert acknowledged");
                true
            }
            _ => false,
        }
    }

    /// Raise a new alert.
    ///
    /// The id (UUIDv7, time-ordered) and timestamp are synthesized here.
    /// The alert lands at the front of the list, keeping it newest-first.
    pub fn add_alert(&self, alert: NewAlert) -> Alert {
        let alert = Alert {
            id: Uuid::now_v7(),
            kind: alert.kind,
            message: alert.message,
            sensor: alert.sensor,
            value: alert.value,
            threshold: alert.threshold,
            timestamp: Utc::now(),
            acknowledged: false,
        };

        {
            let mut state = self.state.write().unwrap();
            state.alerts.insert(0, alert.clone());
        }

        info!(alert_id = %alert.id, kind = ?alert.kind, message = %alert.message, "Alert raised");
        alert
    }

    /// Toggle whether timer ticks drive refreshes.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
        info!(connected, "Connectivity changed");
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Subscribe to refresh broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<TankUpdate> {
        self.update_tx.subscribe()
    }

    /// Current actuator settings.
    pub fn controls(&self) -> ControlSettings {
        self.controls.read().unwrap().clone()
    }

    /// Replace actuator settings wholesale.
    pub fn set_controls(&self, controls: ControlSettings) {
        *self.controls.write().unwrap() = controls;
        info!("Control settings updated");
    }
}
