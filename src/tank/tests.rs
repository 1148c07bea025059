use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::*;
use crate::config::TankConfig;
use crate::sensor::{classify, health_score, SensorSampler, Status};

fn optimal_frame() -> SensorFrame {
    SensorFrame {
        temperature: 28.0,
        ph: 7.8,
        dissolved_oxygen: 6.0,
        ammonia: 0.03,
        nitrite: 0.1,
        nitrate: 10.0,
        salinity: 26.0,
        turbidity: 8.0,
        tan: 0.4,
    }
}

/// Store over a clean (no demo alerts) state with a deterministic sampler.
fn test_store() -> TankStore {
    let state = TankState::from_config(&TankConfig::default(), optimal_frame());
    TankStore::new(state, SensorSampler::with_seed(7))
}

#[test]
fn test_refresh_replaces_frame_score_and_timestamp_together() {
    let store = test_store();
    let before = store.state();

    let update = store.refresh();
    let after = store.state();

    // Timestamp never moves backwards
    assert!(after.last_updated >= before.last_updated);

    // The returned update mirrors the held state exactly
    assert_eq!(after.sensors, update.sensors);
    assert_eq!(after.health_score, update.health_score);
    assert_eq!(after.last_updated, update.timestamp);

    // Score is consistent with the frame it was published with
    assert_eq!(after.health_score, health_score(&after.sensors));
}

#[test]
fn test_refresh_score_matches_classification_sum() {
    let store = test_store();

    for _ in 0..20 {
        let update = store.refresh();

        let mut expected: i32 = 100;
        for sensor in Sensor::ALL {
            match classify(sensor, update.sensors.get(sensor)) {
                Status::Optimal => {}
                Status::Warning => expected -= 5,
                Status::Critical => expected -= 15,
            }
        }

        assert_eq!(update.health_score as i32, expected.clamp(0, 100));
    }
}

#[test]
fn test_add_alert_prepends_newest_first() {
    let store = test_store();

    let first = store.add_alert(NewAlert::new(AlertKind::Info, "first"));
    let second = store.add_alert(NewAlert::new(AlertKind::Warning, "second"));

    let state = store.state();
    assert_eq!(state.alerts.len(), 2);
    assert_eq!(state.alerts[0].id, second.id);
    assert_eq!(state.alerts[1].id, first.id);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_alert_carries_reading_provenance() {
    let store = test_store();

    let alert = store.add_alert(
        NewAlert::new(AlertKind::Warning, "DO low").with_reading(
            Sensor::DissolvedOxygen,
            4.5,
            5.0,
        ),
    );

    assert_eq!(alert.sensor, Some(Sensor::DissolvedOxygen));
    assert_eq!(alert.value, Some(4.5));
    assert_eq!(alert.threshold, Some(5.0));
    assert!(!alert.acknowledged);
}

#[test]
fn test_acknowledge_is_idempotent() {
    let store = test_store();
    let alert = store.add_alert(NewAlert::new(AlertKind::Warning, "DO low"));

    assert!(store.acknowledge_alert(alert.id));

    let state = store.state();
    assert_eq!(state.alerts.len(), 1);
    assert!(state.alerts[0].acknowledged);

    // Second acknowledge is a no-op, state unchanged
    assert!(!store.acknowledge_alert(alert.id));
    let state2 = store.state();
    assert_eq!(state2.alerts.len(), 1);
    assert!(state2.alerts[0].acknowledged);
}

#[test]
fn test_acknowledge_unknown_id_is_noop() {
    let store = test_store();
    store.add_alert(NewAlert::new(AlertKind::Info, "hello"));

    assert!(!store.acknowledge_alert(Uuid::now_v7()));
    assert!(!store.state().alerts[0].acknowledged);
}

#[test]
fn test_refresh_broadcasts_update() {
    let store = test_store();
    let mut rx = store.subscribe();

    let update = store.refresh();

    let received = rx.try_recv().unwrap();
    assert_eq!(received.health_score, update.health_score);
    assert_eq!(received.sensors, update.sensors);
}

#[test]
fn test_refresh_without_subscribers_succeeds() {
    let store = test_store();
    store.refresh();
    store.refresh();
}

#[test]
fn test_seeded_state_carries_demo_alerts() {
    let state = TankState::seeded(&TankConfig::default(), optimal_frame());

    assert_eq!(state.alerts.len(), 2);
    assert_eq!(state.alerts[0].kind, AlertKind::Warning);
    assert_eq!(state.alerts[0].sensor, Some(Sensor::DissolvedOxygen));
    assert!(!state.alerts[0].acknowledged);
    assert_eq!(state.alerts[1].kind, AlertKind::Info);
    assert!(state.alerts[1].acknowledged);

    // Score is computed from the frame, not carried over from anywhere
    assert_eq!(state.health_score, health_score(&state.sensors));
}

#[test]
fn test_controls_replaced_wholesale() {
    let store = test_store();

    let mut controls = store.controls();
    assert!(controls.aerator_enabled);

    controls.aerator_speed = 90;
    controls.aerator_enabled = false;
    store.set_controls(controls.clone());

    assert_eq!(store.controls(), controls);
}

#[tokio::test]
async fn test_disconnected_ticks_do_not_mutate() {
    let state = TankState::from_config(&TankConfig::default(), optimal_frame());
    let store = Arc::new(TankStore::new(state, SensorSampler::with_seed(7)));

    store.set_connected(false);
    let before = store.state();

    let monitor = Monitor::start(Arc::clone(&store), 10);
    tokio::time::sleep(Duration::from_millis(60)).await;

    // Ticks landed, nothing moved
    assert_eq!(store.state().last_updated, before.last_updated);

    store.set_connected(true);
    tokio::time::sleep(Duration::from_millis(60)).await;

    assert!(store.state().last_updated > before.last_updated);

    monitor.stop();
}

#[tokio::test]
async fn test_stopping_monitor_cancels_timer() {
    let state = TankState::from_config(&TankConfig::default(), optimal_frame());
    let store = Arc::new(TankStore::new(state, SensorSampler::with_seed(7)));

    let monitor = Monitor::start(Arc::clone(&store), 10);
    tokio::time::sleep(Duration::from_millis(40)).await;
    monitor.stop();

    let frozen = store.state();
    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(store.state().last_updated, frozen.last_updated);
}
