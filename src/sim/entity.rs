//! Shared entity state and the uniform entity interface

use glam::Vec2;

use super::collision::circles_overlap;
use crate::platform::{Color, Surface, WHITE};

/// Entity IDs are allocated in spawn order and never reused within a session
pub type EntityId = u32;

/// Circle body shared by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Centre
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Collision and draw radius
    pub radius: f32,
    alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            alive: true,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Integrate position over `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark dead. Returns true only on the alive -> dead transition.
    pub fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    /// Open-ball overlap: touching circles do not collide
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }
}

/// Capabilities the frame loop dispatches over: asteroids, shots and the player
pub trait Entity {
    fn id(&self) -> EntityId;
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance one frame. Called exactly once per live entity per frame.
    fn update(&mut self, dt: f32) {
        self.body_mut().advance(dt);
    }

    fn color(&self) -> Color {
        WHITE
    }

    fn draw(&self, surface: &mut dyn Surface, line_width: f32) {
        let body = self.body();
        surface.draw_circle(body.pos, body.radius, line_width, self.color());
    }

    fn is_alive(&self) -> bool {
        self.body().is_alive()
    }

    /// Idempotent
    fn kill(&mut self) {
        self.body_mut().kill();
    }

    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.body().overlaps(other.body())
    }
}
