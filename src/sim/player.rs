//! The player's ship
//!
//! Heading is in degrees, 0 along +Y. Rotate-left decreases it. Thrust
//! accelerates along the heading and speed is capped; there is no drag. The
//! ship stays on screen: it stops against the edges rather than wrapping.

use glam::Vec2;

use super::entity::{Body, Entity, EntityId};
use crate::config::Config;
use crate::platform::InputState;
use crate::{heading_vector, normalize_degrees};

/// A shot the player wants to fire this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: EntityId,
    pub body: Body,
    /// Degrees, normalized to [-180, 180)
    pub heading: f32,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
}

impl Player {
    pub fn new(id: EntityId, position: Vec2, radius: f32) -> Self {
        Self {
            id,
            body: Body::new(position, radius),
            heading: 0.0,
            cooldown: 0.0,
        }
    }

    /// Unit vector the ship points along
    pub fn forward(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Tip of the ship, where shots appear
    pub fn nose(&self) -> Vec2 {
        self.body.pos + self.forward() * self.body.radius
    }

    /// Apply one frame of input: cooldown, rotation, thrust, fire.
    pub fn control(&mut self, input: &InputState, dt: f32, config: &Config) -> Option<ShotSpawn> {
        self.cooldown = (self.cooldown - dt).max(0.0);

        let turn = f32::from(u8::from(input.rotate_right)) - f32::from(u8::from(input.rotate_left));
        if turn != 0.0 {
            self.heading = normalize_degrees(self.heading + turn * config.player_turn_speed * dt);
        }

        let thrust =
            f32::from(u8::from(input.thrust_forward)) - f32::from(u8::from(input.thrust_backward));
        if thrust != 0.0 {
            self.body.vel += self.forward() * thrust * config.player_acceleration * dt;
            self.body.vel = self.body.vel.clamp_length_max(config.player_max_speed);
        }

        if input.fire { self.fire(config) } else { None }
    }

    /// Keep the whole ship inside the play area. Velocity into a wall is
    /// dropped; velocity along it is kept.
    pub fn confine(&mut self, config: &Config) {
        let r = self.body.radius;
        let max = Vec2::new(config.screen_width - r, config.screen_height - r).max(Vec2::splat(r));
        let clamped = self.body.pos.clamp(Vec2::splat(r), max);
        if clamped.x != self.body.pos.x {
            self.body.vel.x = 0.0;
        }
        if clamped.y != self.body.pos.y {
            self.body.vel.y = 0.0;
        }
        self.body.pos = clamped;
    }

    /// Fire if the cooldown has elapsed; otherwise nothing happens
    pub fn fire(&mut self, config: &Config) -> Option<ShotSpawn> {
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown = config.shot_cooldown;

        let mut velocity = self.forward() * config.shot_speed;
        if config.shot_inherits_velocity {
            velocity += self.body.vel;
        }
        Some(ShotSpawn {
            position: self.nose(),
            velocity,
        })
    }
}

impl Entity for Player {
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

    fn player() -> Player {
        Player::new(1, Vec2::new(640.0, 360.0), 20.0)
    }

    #[test]
    fn test_confined_to_screen() {
        let config = Config::default();
        let mut p = player();
        let back = InputState {
            thrust_backward: true,
            ..Default::default()
        };
        // Backing away along -Y for long enough to leave the screen
        for _ in 0..600 {
            p.control(&back, 1.0 / 60.0, &config);
            p.update(1.0 / 60.0);
            p.confine(&config);
        }
        assert_eq!(p.body.pos, Vec2::new(640.0, 20.0));
        assert_eq!(p.body.vel.y, 0.0);

        // Sliding along a wall keeps the parallel component
        p.body.vel = Vec2::new(50.0, -50.0);
        p.update(0.1);
        p.confine(&config);
        assert_eq!(p.body.pos, Vec2::new(645.0, 20.0));
        assert_eq!(p.body.vel, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_rotation() {
        let config = Config::default();
        let mut p = player();
        let right = InputState {
            rotate_right: true,
            ..Default::default()
        };
        p.control(&right, 0.1, &config);
        assert!((p.heading - 30.0).abs() < 1e-4);

        let both = InputState {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        p.control(&both, 0.1, &config);
        assert!((p.heading - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_thrust_accelerates_and_caps() {
        let config = Config::default();
        let mut p = player();
        let forward = InputState {
            thrust_forward: true,
            ..Default::default()
        };
        p.control(&forward, 0.5, &config);
        assert!((p.body.vel - Vec2::new(0.0, 150.0)).length() < 1e-3);

        for _ in 0..20 {
            p.control(&forward, 0.5, &config);
        }
        assert!((p.body.vel.length() - config.player_max_speed).abs() < 1e-2);

        let back = InputState {
            thrust_backward: true,
            ..Default::default()
        };
        p.control(&back, 0.5, &config);
        assert!(p.body.vel.length() < config.player_max_speed);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let config = Config::default();
        let mut p = player();
        let fire = InputState {
            fire: true,
            ..Default::default()
        };

        let shot = p.control(&fire, 0.01, &config).expect("first shot fires");
        assert_eq!(shot.position, Vec2::new(640.0, 380.0));
        assert!((shot.velocity - Vec2::new(0.0, 500.0)).length() < 1e-3);
        assert_eq!(p.cooldown, config.shot_cooldown);

        // Still cooling down: no-op
        assert!(p.control(&fire, 0.1, &config).is_none());
        assert!(p.control(&fire, 0.1, &config).is_none());
        // Cooldown fully elapsed
        assert!(p.control(&fire, 0.15, &config).is_some());
    }

    #[test]
    fn test_shot_velocity_inheritance() {
        let mut config = Config::default();
        let mut p = player();
        p.body.vel = Vec2::new(100.0, 0.0);

        let shot = p.fire(&config).expect("fires");
        assert!((shot.velocity - Vec2::new(0.0, 500.0)).length() < 1e-3);

        config.shot_inherits_velocity = true;
        p.cooldown = 0.0;
        let shot = p.fire(&config).expect("fires");
        assert!((shot.velocity - Vec2::new(100.0, 500.0)).length() < 1e-3);
    }
}
