//! Asteroid field: periodic spawns from beyond the screen edges
//!
//! Every `spawn_interval` seconds of accumulated frame time one asteroid is
//! placed just outside a random edge, heading inward with some angular jitter.

use glam::Vec2;
use rand::Rng;

use super::spawn::Spawner;
use crate::config::Config;
use crate::error::SimError;
use crate::rotate_degrees;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the play area (screen coordinates, y down)
    pub fn inward(&self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
            Edge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Spawn point at fraction `t` (0..=1) along this edge, one max-radius
    /// outside the screen
    pub fn point(&self, t: f32, config: &Config) -> Vec2 {
        let offset = config.asteroid_max_radius();
        let (w, h) = (config.screen_width, config.screen_height);
        match self {
            Edge::Left => Vec2::new(-offset, t * h),
            Edge::Right => Vec2::new(w + offset, t * h),
            Edge::Top => Vec2::new(t * w, -offset),
            Edge::Bottom => Vec2::new(t * w, h + offset),
        }
    }
}

/// Spawn scheduler. One per session.
#[derive(Debug, Clone)]
pub struct AsteroidField {
    spawn_timer: f32,
    spawn_interval: f32,
    spawned: u64,
}

impl AsteroidField {
    pub fn new(spawn_interval: f32) -> Self {
        Self {
            spawn_timer: 0.0,
            spawn_interval,
            spawned: 0,
        }
    }

    /// Seconds accumulated toward the next spawn
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Asteroids this field has introduced so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Register a new asteroid
    pub fn spawn(
        &mut self,
        spawner: &mut dyn Spawner,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<(), SimError> {
        spawner.spawn_asteroid(radius, position, velocity)?;
        self.spawned += 1;
        log::debug!("Field spawn #{}: r={radius} at {position} vel {velocity}", self.spawned);
        Ok(())
    }

    /// Accumulate `dt` and spawn at most one asteroid when the interval is
    /// reached. The remainder carries over, so spawns land on exact multiples
    /// of the interval. A frame longer than the interval leaves at most one
    /// spawn pending. Returns whether a spawn happened.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        spawner: &mut dyn Spawner,
        config: &Config,
    ) -> Result<bool, SimError> {
        self.spawn_timer += dt;
        if self.spawn_timer < self.spawn_interval {
            return Ok(false);
        }
        self.spawn_timer = (self.spawn_timer - self.spawn_interval).min(self.spawn_interval);

        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let speed = rng.random_range(config.asteroid_min_speed..=config.asteroid_max_speed);
        let jitter = config.asteroid_spawn_jitter_deg;
        let velocity = rotate_degrees(edge.inward() * speed, rng.random_range(-jitter..=jitter));
        let position = edge.point(rng.random::<f32>(), config);
        let kind = rng.random_range(1..=config.asteroid_kinds);

        self.spawn(
            spawner,
            config.asteroid_min_radius * kind as f32,
            position,
            velocity,
        )?;
        Ok(true)
    }
}
