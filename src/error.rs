//! Error types
//!
//! Configuration problems are caught once at session start. Simulation errors
//! are invariant violations and end the session.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("asteroid_kinds must be at least 1")]
    NoAsteroidKinds,

    #[error("target_fps must be at least 1")]
    ZeroFrameRate,

    #[error("asteroid speed range is empty: min {min} > max {max}")]
    SpeedRange { min: f32, max: f32 },

    #[error("{field} must be within [0, 180] degrees, got {value}")]
    AngleOutOfRange { field: &'static str, value: f32 },

    #[error("asteroid_spawn_jitter_deg must be within [0, 90) degrees, got {value}")]
    SpawnJitter { value: f32 },

    #[error("asteroid_spawn_interval {interval}s is shorter than max_frame_dt {max_frame_dt}s")]
    SpawnFasterThanFrame { interval: f32, max_frame_dt: f32 },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation invariant violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("asteroid radius {radius} is below the minimum {min}")]
    AsteroidBelowMinimum { radius: f32, min: f32 },
}

/// Anything that can stop a session other than quit or game over
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sim(#[from] SimError),
}
