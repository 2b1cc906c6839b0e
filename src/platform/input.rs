//! Input collaborator
//!
//! Input is polled once per frame. Sources get a read-only view of the
//! simulation so scripted pilots can react to it; keyboard-backed sources
//! simply ignore it.

use std::collections::VecDeque;

use crate::sim::{Entity, SimulationContext};
use crate::{heading_of, normalize_degrees};

/// Key state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust_forward: bool,
    pub thrust_backward: bool,
    pub fire: bool,
    /// Stop the session after this poll
    pub quit: bool,
}

impl InputState {
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

pub trait InputSource {
    fn poll(&mut self, world: &SimulationContext) -> InputState;
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _world: &SimulationContext) -> InputState {
        self.frames.pop_front().unwrap_or_else(InputState::quit)
    }
}

/// Demo mode: the ship defends itself
///
/// Turns toward the nearest live asteroid, fires once roughly lined up and
/// backs away from anything that gets close. Quits after `frame_budget`
/// polls (`None` runs until game over).
#[derive(Debug, Clone)]
pub struct DemoPilot {
    frame_budget: Option<u64>,
    polls: u64,
    /// Degrees of misalignment tolerated before firing
    pub aim_tolerance: f32,
    /// Back off when an asteroid's edge is within this distance of the ship's edge
    pub danger_distance: f32,
}

impl DemoPilot {
    pub fn new(frame_budget: Option<u64>) -> Self {
        Self {
            frame_budget,
            polls: 0,
            aim_tolerance: 8.0,
            danger_distance: 120.0,
        }
    }
}

impl Default for DemoPilot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl InputSource for DemoPilot {
    fn poll(&mut self, world: &SimulationContext) -> InputState {
        self.polls += 1;
        if self.frame_budget.is_some_and(|budget| self.polls > budget) {
            return InputState::quit();
        }

        let player = world.player();
        let ship = player.body();
        let nearest = world.live_asteroids().min_by(|a, b| {
            let da = a.body.pos.distance_squared(ship.pos);
            let db = b.body.pos.distance_squared(ship.pos);
            da.total_cmp(&db)
        });
        let Some(target) = nearest else {
            return InputState::default();
        };

        let to_target = target.body.pos - ship.pos;
        let delta = normalize_degrees(heading_of(to_target) - player.heading);
        let gap = to_target.length() - target.body.radius - ship.radius;

        InputState {
            rotate_left: delta < -self.aim_tolerance / 2.0,
            rotate_right: delta > self.aim_tolerance / 2.0,
            thrust_forward: false,
            thrust_backward: gap < self.danger_distance && delta.abs() < 90.0,
            fire: delta.abs() <= self.aim_tolerance,
            quit: false,
        }
    }
}
