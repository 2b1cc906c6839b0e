//! Asteroids and the split rule
//!
//! An asteroid's tier ("kind") is `floor(radius / min_radius)`. Hitting one
//! with a shot kills it and, for tier 2 and up, spawns two children one tier
//! smaller that fly off faster than the parent.

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityId};
use super::spawn::Spawner;
use crate::config::Config;
use crate::error::SimError;
use crate::rotate_degrees;
use crate::telemetry::{GameEvent, Telemetry};

/// Tier of an asteroid with the given radius
#[inline]
pub fn tier(radius: f32, min_radius: f32) -> u32 {
    (radius / min_radius).floor() as u32
}

/// Radius of split children, or `None` when the asteroid is in the smallest tier
pub fn child_radius(radius: f32, min_radius: f32) -> Option<f32> {
    let kind = tier(radius, min_radius);
    (kind >= 2).then(|| min_radius * (kind - 1) as f32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: EntityId,
    pub body: Body,
    kind: u32,
}

impl Asteroid {
    pub fn new(id: EntityId, position: Vec2, radius: f32, min_radius: f32) -> Self {
        Self {
            id,
            body: Body::new(position, radius),
            kind: tier(radius, min_radius),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.body.vel = velocity;
        self
    }

    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Destroy this asteroid after a shot hit, spawning children through `spawner`.
    ///
    /// Returns the number of children requested (0 or 2). Splitting an
    /// asteroid that is already below the minimum radius is an invariant
    /// violation: the asteroid is still removed, but the error is returned.
    pub fn split<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        spawner: &mut dyn Spawner,
        telemetry: &mut dyn Telemetry,
        config: &Config,
    ) -> Result<usize, SimError> {
        telemetry.log_event(GameEvent::AsteroidSplit);
        self.kill();

        let min = config.asteroid_min_radius;
        let radius = self.body.radius;
        if radius < min {
            log::error!("Split of asteroid {} with radius {radius} below minimum {min}", self.id);
            return Err(SimError::AsteroidBelowMinimum { radius, min });
        }

        let Some(new_radius) = child_radius(radius, min) else {
            log::debug!("Asteroid {} vanished", self.id);
            return Ok(0);
        };

        let spread = config.split_angle_deg;
        for _ in 0..2 {
            let angle = rng.random_range(-spread..=spread);
            let velocity = rotate_degrees(self.body.vel, angle) * config.split_speed_scale;
            spawner.spawn_asteroid(new_radius, self.body.pos, velocity)?;
        }
        log::debug!(
            "Asteroid {} (kind {}) split into two of radius {new_radius}",
            self.id,
            self.kind
        );
        Ok(2)
    }
}

impl Entity for Asteroid {
    fn id(&self) -> EntityId {
        self.id
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::SpawnQueue;
    use crate::telemetry::RecordingTelemetry;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn split_once(
        asteroid: &mut Asteroid,
        seed: u64,
    ) -> (Result<usize, SimError>, SpawnQueue, RecordingTelemetry) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut queue = SpawnQueue::new();
        let mut telemetry = RecordingTelemetry::new();
        let result = asteroid.split(&mut rng, &mut queue, &mut telemetry, &config);
        (result, queue, telemetry)
    }

    #[test]
    fn test_kind_from_radius() {
        assert_eq!(Asteroid::new(1, Vec2::ZERO, 60.0, 20.0).kind(), 3);
        assert_eq!(Asteroid::new(1, Vec2::ZERO, 40.0, 20.0).kind(), 2);
        assert_eq!(Asteroid::new(1, Vec2::ZERO, 39.9, 20.0).kind(), 1);
    }

    #[test]
    fn test_split_large_asteroid() {
        let parent_vel = Vec2::new(50.0, 0.0);
        let mut asteroid =
            Asteroid::new(1, Vec2::new(100.0, 100.0), 60.0, 20.0).with_velocity(parent_vel);
        let (result, queue, telemetry) = split_once(&mut asteroid, 42);

        assert_eq!(result, Ok(2));
        assert!(!asteroid.is_alive());
        assert_eq!(telemetry.count(GameEvent::AsteroidSplit), 1);
        assert_eq!(queue.len(), 2);

        for child in queue.pending() {
            assert_eq!(child.radius, 40.0);
            assert_eq!(child.position, Vec2::new(100.0, 100.0));
            assert!((child.velocity.length() - parent_vel.length() * 1.2).abs() < 1e-3);
            let angle = parent_vel.angle_to(child.velocity).to_degrees();
            assert!(angle.abs() <= 45.0 + 1e-3, "child deviates by {angle} degrees");
        }
    }

    #[test]
    fn test_smallest_tier_vanishes() {
        let mut asteroid = Asteroid::new(1, Vec2::ZERO, 20.0, 20.0).with_velocity(Vec2::X);
        let (result, queue, telemetry) = split_once(&mut asteroid, 1);
        assert_eq!(result, Ok(0));
        assert!(queue.is_empty());
        assert!(!asteroid.is_alive());
        assert_eq!(telemetry.count(GameEvent::AsteroidSplit), 1);
    }

    #[test]
    fn test_split_below_minimum_is_invariant_violation() {
        let mut asteroid = Asteroid::new(1, Vec2::ZERO, 10.0, 20.0);
        let (result, queue, telemetry) = split_once(&mut asteroid, 1);
        assert_eq!(
            result,
            Err(SimError::AsteroidBelowMinimum {
                radius: 10.0,
                min: 20.0
            })
        );
        assert!(queue.is_empty());
        assert!(!asteroid.is_alive());
        assert_eq!(telemetry.count(GameEvent::AsteroidSplit), 1);
    }

    #[test]
    fn test_child_radius() {
        assert_eq!(child_radius(60.0, 20.0), Some(40.0));
        assert_eq!(child_radius(40.0, 20.0), Some(20.0));
        assert_eq!(child_radius(55.0, 20.0), Some(20.0));
        assert_eq!(child_radius(39.0, 20.0), None);
        assert_eq!(child_radius(20.0, 20.0), None);
    }

    proptest! {
        #[test]
        fn prop_children_never_below_minimum(
            radius in 20u32..400,
            seed in any::<u64>(),
        ) {
            let radius = radius as f32;
            let mut asteroid = Asteroid::new(1, Vec2::ZERO, radius, 20.0).with_velocity(Vec2::new(0.0, 60.0));
            let (result, queue, _) = split_once(&mut asteroid, seed);
            let expected = if radius >= 40.0 { 2 } else { 0 };
            prop_assert_eq!(result, Ok(expected));
            prop_assert_eq!(queue.len(), expected);
            for child in queue.pending() {
                prop_assert!(child.radius >= 20.0);
                prop_assert!(child.radius < radius);
                prop_assert_eq!(child.radius, 20.0 * ((radius / 20.0).floor() - 1.0));
            }
        }
    }
}
