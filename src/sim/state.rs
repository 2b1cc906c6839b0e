//! Live entity sets for one session
//!
//! [`SimulationContext`] owns every live entity and is the only place entities
//! are added or removed. Asteroids and shots are kept in spawn order, which is
//! also ID order.

use glam::Vec2;
use serde::Serialize;

use super::asteroid::Asteroid;
use super::entity::{Entity, EntityId};
use super::player::Player;
use super::shot::Shot;
use super::spawn::Spawner;
use crate::config::Config;
use crate::error::SimError;

/// Session state machine: `Running` -> `GameOver` (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Running,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub(crate) player: Player,
    pub(crate) asteroids: Vec<Asteroid>,
    pub(crate) shots: Vec<Shot>,
    min_asteroid_radius: f32,
    next_id: EntityId,
}

impl SimulationContext {
    /// Empty field with the player at the centre of the screen
    pub fn new(config: &Config) -> Self {
        let centre = Vec2::new(config.screen_width, config.screen_height) / 2.0;
        Self {
            player: Player::new(1, centre, config.player_radius),
            asteroids: Vec::new(),
            shots: Vec::new(),
            min_asteroid_radius: config.asteroid_min_radius,
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Register an asteroid, rejecting radii below the minimum
    pub fn add_asteroid(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<EntityId, SimError> {
        let min = self.min_asteroid_radius;
        if radius.is_nan() || radius < min {
            log::error!("Refusing to register asteroid with radius {radius} (minimum {min})");
            return Err(SimError::AsteroidBelowMinimum { radius, min });
        }
        let id = self.next_entity_id();
        self.asteroids
            .push(Asteroid::new(id, position, radius, min).with_velocity(velocity));
        Ok(id)
    }

    pub fn add_shot(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        lifetime: f32,
    ) -> EntityId {
        let id = self.next_entity_id();
        self.shots
            .push(Shot::new(id, position, velocity, radius, lifetime));
        id
    }

    pub fn live_asteroids(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.is_alive())
    }

    pub fn live_shots(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter().filter(|s| s.is_alive())
    }

    /// Kill asteroids that drifted beyond the cull margin. Returns how many.
    pub fn cull_offscreen(&mut self, config: &Config) -> usize {
        let margin = config.cull_margin();
        let (min, max) = (
            Vec2::splat(-margin),
            Vec2::new(config.screen_width + margin, config.screen_height + margin),
        );
        let mut culled = 0;
        for asteroid in self.asteroids.iter_mut().filter(|a| a.is_alive()) {
            let p = asteroid.body.pos;
            if p.cmplt(min).any() || p.cmpgt(max).any() {
                asteroid.kill();
                culled += 1;
                log::debug!("Culled asteroid {} at {p}", asteroid.id);
            }
        }
        culled
    }

    /// Drop dead asteroids and shots. Returns how many were removed.
    pub fn purge_dead(&mut self) -> usize {
        let before = self.asteroids.len() + self.shots.len();
        self.asteroids.retain(|a| a.is_alive());
        self.shots.retain(|s| s.is_alive());
        before - self.asteroids.len() - self.shots.len()
    }

    /// Live entities in spawn order
    pub fn draw_order(&self) -> Vec<&dyn Entity> {
        let mut order: Vec<&dyn Entity> =
            Vec::with_capacity(1 + self.asteroids.len() + self.shots.len());
        order.push(&self.player);
        order.extend(self.asteroids.iter().map(|a| a as &dyn Entity));
        order.extend(self.shots.iter().map(|s| s as &dyn Entity));
        order.retain(|e| e.is_alive());
        order.sort_by_key(|e| e.id());
        order
    }
}

impl Spawner for SimulationContext {
    fn spawn_asteroid(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<(), SimError> {
        self.add_asteroid(radius, position, velocity).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawns_first_at_centre() {
        let config = Config::default();
        let ctx = SimulationContext::new(&config);
        assert_eq!(ctx.player().id, 1);
        assert_eq!(ctx.player().body.pos, Vec2::new(640.0, 360.0));
        assert!(ctx.asteroids().is_empty());
        assert!(ctx.shots().is_empty());
    }

    #[test]
    fn test_add_asteroid_enforces_minimum() {
        let config = Config::default();
        let mut ctx = SimulationContext::new(&config);
        assert_eq!(
            ctx.add_asteroid(10.0, Vec2::ZERO, Vec2::ZERO),
            Err(SimError::AsteroidBelowMinimum {
                radius: 10.0,
                min: 20.0
            })
        );
        assert!(ctx.add_asteroid(f32::NAN, Vec2::ZERO, Vec2::ZERO).is_err());
        assert_eq!(ctx.add_asteroid(20.0, Vec2::ZERO, Vec2::ZERO), Ok(2));
        assert_eq!(ctx.asteroids()[0].kind(), 1);
    }

    #[test]
    fn test_purge_and_draw_order() {
        let config = Config::default();
        let mut ctx = SimulationContext::new(&config);
        let a = ctx.add_asteroid(40.0, Vec2::ZERO, Vec2::ZERO).expect("valid");
        let s = ctx.add_shot(Vec2::ONE, Vec2::ZERO, 5.0, 2.0);
        let b = ctx.add_asteroid(20.0, Vec2::ONE, Vec2::ZERO).expect("valid");

        let ids: Vec<_> = ctx.draw_order().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, a, s, b]);

        ctx.asteroids[0].kill();
        // Dead entities are excluded from drawing even before the purge
        let ids: Vec<_> = ctx.draw_order().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, s, b]);

        assert_eq!(ctx.purge_dead(), 1);
        assert_eq!(ctx.asteroids().len(), 1);
        assert_eq!(ctx.asteroids()[0].id, b);
        // Purging twice removes nothing more
        assert_eq!(ctx.purge_dead(), 0);
    }

    #[test]
    fn test_cull_offscreen() {
        let config = Config::default();
        let mut ctx = SimulationContext::new(&config);
        // Fresh edge spawns sit one max radius outside and must survive
        ctx.add_asteroid(60.0, Vec2::new(-60.0, 100.0), Vec2::X).expect("valid");
        ctx.add_asteroid(60.0, Vec2::new(-200.0, 100.0), Vec2::NEG_X).expect("valid");
        ctx.add_asteroid(20.0, Vec2::new(640.0, 900.0), Vec2::Y).expect("valid");
        assert_eq!(ctx.cull_offscreen(&config), 2);
        assert_eq!(ctx.live_asteroids().count(), 1);
    }
}
