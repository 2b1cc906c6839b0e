//! Asteroid registration capability
//!
//! Asteroids and the asteroid field only ever see a [`Spawner`]; neither knows
//! where new asteroids end up.

use glam::Vec2;

use crate::error::SimError;

/// Registers new asteroids with the running simulation
pub trait Spawner {
    fn spawn_asteroid(&mut self, radius: f32, position: Vec2, velocity: Vec2)
    -> Result<(), SimError>;
}

/// A requested asteroid that has not been registered yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    pub radius: f32,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Buffers spawns while the live sets are borrowed, then forwards them
#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: Vec<AsteroidSpawn>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[AsteroidSpawn] {
        &self.pending
    }

    /// Register everything buffered, in request order
    pub fn flush_into(&mut self, spawner: &mut dyn Spawner) -> Result<usize, SimError> {
        let count = self.pending.len();
        for spawn in self.pending.drain(..) {
            spawner.spawn_asteroid(spawn.radius, spawn.position, spawn.velocity)?;
        }
        Ok(count)
    }
}

impl Spawner for SpawnQueue {
    fn spawn_asteroid(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<(), SimError> {
        self.pending.push(AsteroidSpawn {
            radius,
            position,
            velocity,
        });
        Ok(())
    }
}
