//! Telemetry sink
//!
//! The simulation reports three discrete events and offers one state snapshot
//! per frame. What a sink does with them is its own business.

use glam::Vec2;
use serde::Serialize;

use crate::sim::GamePhase;

/// Discrete gameplay events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An asteroid was split (including the terminal vanish of the smallest tier)
    AsteroidSplit,
    /// A shot hit an asteroid
    AsteroidShot,
    /// An asteroid hit the player
    PlayerHit,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::AsteroidSplit => "asteroid_split",
            GameEvent::AsteroidShot => "asteroid_shot",
            GameEvent::PlayerHit => "player_hit",
        }
    }
}

/// Per-frame view of the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub frame: u64,
    /// Simulated seconds since session start
    pub elapsed: f32,
    pub phase: GamePhase,
    pub player_pos: Vec2,
    pub player_heading: f32,
    pub asteroids: usize,
    pub shots: usize,
    pub asteroids_destroyed: u64,
    pub shots_fired: u64,
}

/// Receiver for events and state snapshots
pub trait Telemetry {
    fn log_event(&mut self, event: GameEvent);

    /// Called once at the start of every frame
    fn log_state(&mut self, snapshot: &StateSnapshot);
}

/// Writes telemetry through the `log` facade
///
/// Snapshots are rate limited by simulated time so a 60 fps session does not
/// flood the log.
#[derive(Debug)]
pub struct LogTelemetry {
    interval: f32,
    last_logged: Option<f32>,
}

impl LogTelemetry {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last_logged: None,
        }
    }
}

impl Telemetry for LogTelemetry {
    fn log_event(&mut self, event: GameEvent) {
        log::info!(target: "telemetry", "event={}", event.name());
    }

    fn log_state(&mut self, snapshot: &StateSnapshot) {
        let due = self
            .last_logged
            .is_none_or(|last| snapshot.elapsed - last >= self.interval);
        if !due {
            return;
        }
        self.last_logged = Some(snapshot.elapsed);
        match serde_json::to_string(snapshot) {
            Ok(json) => log::debug!(target: "telemetry", "state={json}"),
            Err(e) => log::warn!("Failed to serialize state snapshot: {e}"),
        }
    }
}

/// Keeps everything in memory
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    pub events: Vec<GameEvent>,
    pub snapshots: Vec<StateSnapshot>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `event` was logged
    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl Telemetry for RecordingTelemetry {
    fn log_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn log_state(&mut self, snapshot: &StateSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(frame: u64, elapsed: f32) -> StateSnapshot {
        StateSnapshot {
            frame,
            elapsed,
            phase: GamePhase::Running,
            player_pos: Vec2::new(640.0, 360.0),
            player_heading: 0.0,
            asteroids: 0,
            shots: 0,
            asteroids_destroyed: 0,
            shots_fired: 0,
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(GameEvent::AsteroidSplit.name(), "asteroid_split");
        assert_eq!(GameEvent::AsteroidShot.name(), "asteroid_shot");
        assert_eq!(GameEvent::PlayerHit.name(), "player_hit");
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&snapshot(3, 0.05)).expect("serializable");
        assert!(json.contains("\"frame\":3"));
        assert!(json.contains("\"phase\":\"running\""));
    }

    #[test]
    fn test_recording_counts() {
        let mut telemetry = RecordingTelemetry::new();
        telemetry.log_event(GameEvent::AsteroidShot);
        telemetry.log_event(GameEvent::AsteroidSplit);
        telemetry.log_event(GameEvent::AsteroidShot);
        telemetry.log_state(&snapshot(1, 0.0));
        assert_eq!(telemetry.count(GameEvent::AsteroidShot), 2);
        assert_eq!(telemetry.count(GameEvent::PlayerHit), 0);
        assert_eq!(telemetry.snapshots.len(), 1);
    }

    #[test]
    fn test_log_telemetry_rate_limit() {
        let mut telemetry = LogTelemetry::new(1.0);
        telemetry.log_state(&snapshot(1, 0.0));
        assert_eq!(telemetry.last_logged, Some(0.0));
        telemetry.log_state(&snapshot(2, 0.5));
        assert_eq!(telemetry.last_logged, Some(0.0));
        telemetry.log_state(&snapshot(3, 1.25));
        assert_eq!(telemetry.last_logged, Some(1.25));
    }
}
