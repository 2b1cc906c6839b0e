//! Player projectiles

use glam::Vec2;

use super::entity::{Body, Entity, EntityId};

/// Ballistic projectile. Dies on its first asteroid hit or when its lifetime
/// runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub id: EntityId,
    pub body: Body,
    /// Seconds since firing
    pub age: f32,
    pub lifetime: f32,
}

impl Shot {
    pub fn new(id: EntityId, position: Vec2, velocity: Vec2, radius: f32, lifetime: f32) -> Self {
        Self {
            id,
            body: Body::new(position, radius).with_velocity(velocity),
            age: 0.0,
            lifetime,
        }
    }

    /// Seconds until expiry
    pub fn remaining(&self) -> f32 {
        (self.lifetime - self.age).max(0.0)
    }
}

impl Entity for Shot {
    fn id(&self) -> EntityId {
        self.id
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        self.age += dt;
        if self.age >= self.lifetime {
            self.body.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_flies_straight() {
        let mut shot = Shot::new(1, Vec2::ZERO, Vec2::new(0.0, 500.0), 5.0, 2.0);
        shot.update(0.25);
        assert_eq!(shot.body.pos, Vec2::new(0.0, 125.0));
        assert!(shot.is_alive());
        assert_eq!(shot.remaining(), 1.75);
    }

    #[test]
    fn test_shot_expires() {
        let mut shot = Shot::new(1, Vec2::ZERO, Vec2::X, 5.0, 1.0);
        shot.update(0.5);
        assert!(shot.is_alive());
        shot.update(0.5);
        assert!(!shot.is_alive());
        assert_eq!(shot.remaining(), 0.0);
    }
}
