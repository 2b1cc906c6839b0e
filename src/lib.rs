//! Asteroids - a frame-stepped 2D arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, frame loop)
//! - `platform`: Render surface, input and clock collaborators
//! - `telemetry`: Discrete game events and per-frame state snapshots
//! - `config`: Injected session constants

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;
pub mod telemetry;

pub use config::Config;
pub use error::{ConfigError, Error, SimError};

use glam::Vec2;

/// Default tuning values (overridable through [`Config`])
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    /// Outline width for every drawn circle
    pub const LINE_WIDTH: f32 = 2.0;

    /// Frame pacing
    pub const TARGET_FPS: u32 = 60;
    /// Largest dt a single frame may advance (stall recovery)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Asteroid tiers: radius = ASTEROID_MIN_RADIUS * kind, kind in 1..=ASTEROID_KINDS
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_KINDS: u32 = 3;
    /// Seconds between edge spawns
    pub const ASTEROID_SPAWN_INTERVAL: f32 = 0.8;
    pub const ASTEROID_MIN_SPEED: f32 = 40.0;
    pub const ASTEROID_MAX_SPEED: f32 = 100.0;
    /// Spawn heading jitter around the inward edge normal (degrees)
    pub const ASTEROID_SPAWN_JITTER_DEG: f32 = 30.0;

    /// Split children deviate up to this many degrees from the parent heading
    pub const SPLIT_ANGLE_DEG: f32 = 45.0;
    /// Children move faster than their parent
    pub const SPLIT_SPEED_SCALE: f32 = 1.2;

    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Units per second squared
    pub const PLAYER_ACCELERATION: f32 = 300.0;
    pub const PLAYER_MAX_SPEED: f32 = 400.0;

    pub const SHOT_RADIUS: f32 = 5.0;
    pub const SHOT_SPEED: f32 = 500.0;
    pub const SHOT_COOLDOWN: f32 = 0.3;
    pub const SHOT_LIFETIME: f32 = 2.0;

    /// Minimum simulated seconds between state snapshots written to the log
    pub const STATE_LOG_INTERVAL: f32 = 1.0;
}

/// Normalize an angle in degrees to [-180, 180)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit vector for a heading; heading 0 points along +Y
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    rotate_degrees(Vec2::Y, heading)
}

/// Heading (degrees) that points along `dir`; inverse of [`heading_vector`]
#[inline]
pub fn heading_of(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(190.0) - (-170.0)).abs() < 1e-4);
        assert!((normalize_degrees(-540.0) - (-180.0)).abs() < 1e-4);
        assert!((normalize_degrees(45.0) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_degrees_quarter_turn() {
        let v = rotate_degrees(Vec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        for deg in [-45.0, -10.0, 0.0, 33.0, 180.0] {
            assert!((rotate_degrees(v, deg).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_heading_round_trip() {
        for heading in [-170.0, -90.0, 0.0, 30.0, 120.0] {
            let back = heading_of(heading_vector(heading));
            assert!((normalize_degrees(back - heading)).abs() < 1e-3);
        }
        // Heading 0 points along +Y
        let up = heading_vector(0.0);
        assert!(up.x.abs() < 1e-6 && (up.y - 1.0).abs() < 1e-6);
    }
}
