//! Session configuration
//!
//! Every tunable the simulation reads is injected through [`Config`]. A config
//! is immutable for the lifetime of a session and validated before the first
//! frame runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Constants for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Play area ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Outline width passed to every draw call
    pub line_width: f32,

    // === Frame pacing ===
    pub target_fps: u32,
    /// Frames longer than this are clamped (stall recovery)
    pub max_frame_dt: f32,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    /// Number of radius tiers; largest asteroid is `min_radius * kinds`
    pub asteroid_kinds: u32,
    /// Seconds between edge spawns
    pub asteroid_spawn_interval: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    /// Max deviation (degrees) from the inward edge normal at spawn
    pub asteroid_spawn_jitter_deg: f32,
    /// Max deviation (degrees) of split children from the parent velocity
    pub split_angle_deg: f32,
    /// Speed multiplier applied to split children
    pub split_speed_scale: f32,

    // === Player ===
    pub player_radius: f32,
    /// Degrees per second
    pub player_turn_speed: f32,
    pub player_acceleration: f32,
    pub player_max_speed: f32,

    // === Shots ===
    pub shot_radius: f32,
    pub shot_speed: f32,
    pub shot_cooldown: f32,
    /// Shots expire after this many seconds even without a hit
    pub shot_lifetime: f32,
    /// Add the player's velocity to new shots
    pub shot_inherits_velocity: bool,

    // === Telemetry ===
    /// Minimum simulated seconds between logged state snapshots
    pub state_log_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            line_width: LINE_WIDTH,

            target_fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_spawn_interval: ASTEROID_SPAWN_INTERVAL,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_spawn_jitter_deg: ASTEROID_SPAWN_JITTER_DEG,
            split_angle_deg: SPLIT_ANGLE_DEG,
            split_speed_scale: SPLIT_SPEED_SCALE,

            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_max_speed: PLAYER_MAX_SPEED,

            shot_radius: SHOT_RADIUS,
            shot_speed: SHOT_SPEED,
            shot_cooldown: SHOT_COOLDOWN,
            shot_lifetime: SHOT_LIFETIME,
            shot_inherits_velocity: false,

            state_log_interval: STATE_LOG_INTERVAL,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("line_width", self.line_width),
            ("max_frame_dt", self.max_frame_dt),
            ("asteroid_min_radius", self.asteroid_min_radius),
            ("asteroid_spawn_interval", self.asteroid_spawn_interval),
            ("asteroid_min_speed", self.asteroid_min_speed),
            ("asteroid_max_speed", self.asteroid_max_speed),
            ("split_speed_scale", self.split_speed_scale),
            ("player_radius", self.player_radius),
            ("player_turn_speed", self.player_turn_speed),
            ("player_acceleration", self.player_acceleration),
            ("player_max_speed", self.player_max_speed),
            ("shot_radius", self.shot_radius),
            ("shot_speed", self.shot_speed),
            ("shot_cooldown", self.shot_cooldown),
            ("shot_lifetime", self.shot_lifetime),
            ("state_log_interval", self.state_log_interval),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.asteroid_kinds == 0 {
            return Err(ConfigError::NoAsteroidKinds);
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.asteroid_min_speed,
                max: self.asteroid_max_speed,
            });
        }

        // Spawns must always head at least partly inward
        let jitter = self.asteroid_spawn_jitter_deg;
        if !(0.0..90.0).contains(&jitter) {
            return Err(ConfigError::SpawnJitter { value: jitter });
        }
        if !(0.0..=180.0).contains(&self.split_angle_deg) {
            return Err(ConfigError::AngleOutOfRange {
                field: "split_angle_deg",
                value: self.split_angle_deg,
            });
        }
        if self.asteroid_spawn_interval < self.max_frame_dt {
            return Err(ConfigError::SpawnFasterThanFrame {
                interval: self.asteroid_spawn_interval,
                max_frame_dt: self.max_frame_dt,
            });
        }

        Ok(())
    }

    /// Radius of the largest asteroid tier
    pub fn asteroid_max_radius(&self) -> f32 {
        self.asteroid_min_radius * self.asteroid_kinds as f32
    }

    /// Asteroids whose centre drifts this far outside the screen are culled
    pub fn cull_margin(&self) -> f32 {
        self.asteroid_max_radius() * 2.0
    }
}
