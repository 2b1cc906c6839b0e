//! Frame pipeline
//!
//! One frame, in order:
//! 1. clamp dt
//! 2. update every live entity (asteroids, shots, then the player)
//! 3. advance the asteroid field spawn timer
//! 4. player vs asteroids (first hit ends the game)
//! 5. shots vs asteroids (each entity consumed at most once)
//! 6. purge dead entities
//! 7. draw live entities in spawn order

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{first_hit, resolve_pairs};
use super::entity::Entity;
use super::field::AsteroidField;
use super::spawn::SpawnQueue;
use super::state::{GamePhase, SimulationContext};
use crate::config::Config;
use crate::error::{ConfigError, SimError};
use crate::platform::{Clock, InputSource, InputState, Surface};
use crate::telemetry::{GameEvent, StateSnapshot, Telemetry};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input collaborator asked to quit
    Quit,
    /// An asteroid hit the player
    GameOver,
}

impl SessionEnd {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionEnd::Quit => 0,
            SessionEnd::GameOver => 2,
        }
    }
}

/// Running totals reported in state snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub asteroids_destroyed: u64,
    pub shots_fired: u64,
}

/// One game session: configuration, RNG, live entities and the spawner
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    rng: Pcg32,
    ctx: SimulationContext,
    field: AsteroidField,
    phase: GamePhase,
    frame: u64,
    elapsed: f32,
    stats: SessionStats,
}

impl Session {
    /// Validate `config` and set up a fresh session
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "New session: seed={seed}, screen={}x{}, spawn interval={}s",
            config.screen_width,
            config.screen_height,
            config.asteroid_spawn_interval
        );
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            ctx: SimulationContext::new(&config),
            field: AsteroidField::new(config.asteroid_spawn_interval),
            phase: GamePhase::Running,
            frame: 0,
            elapsed: 0.0,
            stats: SessionStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.ctx
    }

    pub fn field(&self) -> &AsteroidField {
        &self.field
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let player = self.ctx.player();
        StateSnapshot {
            frame: self.frame,
            elapsed: self.elapsed,
            phase: self.phase,
            player_pos: player.body.pos,
            player_heading: player.heading,
            asteroids: self.ctx.live_asteroids().count(),
            shots: self.ctx.live_shots().count(),
            asteroids_destroyed: self.stats.asteroids_destroyed,
            shots_fired: self.stats.shots_fired,
        }
    }

    /// Run one frame. A session that is already over does nothing.
    pub fn frame(
        &mut self,
        input: &InputState,
        dt: f32,
        surface: &mut dyn Surface,
        telemetry: &mut dyn Telemetry,
    ) -> Result<GamePhase, SimError> {
        if self.phase == GamePhase::GameOver {
            return Ok(self.phase);
        }

        let dt = self.clamp_dt(dt);
        self.frame += 1;
        self.elapsed += dt;
        telemetry.log_state(&self.snapshot());

        self.update_entities(input, dt);
        self.ctx.cull_offscreen(&self.config);
        self.field
            .update(dt, &mut self.rng, &mut self.ctx, &self.config)?;

        if self.check_player_hit(telemetry) {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over at frame {} ({:.2}s), {} asteroids destroyed",
                self.frame,
                self.elapsed,
                self.stats.asteroids_destroyed
            );
        } else {
            self.resolve_shot_hits(telemetry)?;
        }

        self.ctx.purge_dead();
        self.draw(surface);
        Ok(self.phase)
    }

    /// Drive frames until quit or game over
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        surface: &mut dyn Surface,
        telemetry: &mut dyn Telemetry,
    ) -> Result<SessionEnd, SimError> {
        loop {
            if self.phase == GamePhase::GameOver {
                return Ok(SessionEnd::GameOver);
            }
            let state = input.poll(&self.ctx);
            if state.quit {
                log::info!("Quit requested after {} frames", self.frame);
                return Ok(SessionEnd::Quit);
            }
            let dt = clock.tick(self.config.target_fps);
            self.frame(&state, dt, surface, telemetry)?;
        }
    }

    /// Negative, NaN and stalled frame times are clamped, never propagated
    fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring invalid frame time {dt}");
            return 0.0;
        }
        if dt > self.config.max_frame_dt {
            log::warn!(
                "Frame took {dt:.3}s, clamping to {}s",
                self.config.max_frame_dt
            );
            return self.config.max_frame_dt;
        }
        dt
    }

    fn update_entities(&mut self, input: &InputState, dt: f32) {
        for asteroid in self.ctx.asteroids.iter_mut().filter(|a| a.is_alive()) {
            asteroid.update(dt);
        }
        for shot in self.ctx.shots.iter_mut().filter(|s| s.is_alive()) {
            shot.update(dt);
        }

        // The player goes last so a shot fired this frame is not advanced
        // until the next one
        let player = &mut self.ctx.player;
        if !player.is_alive() {
            return;
        }
        let fired = player.control(input, dt, &self.config);
        player.update(dt);
        player.confine(&self.config);
        if let Some(shot) = fired {
            self.ctx.add_shot(
                shot.position,
                shot.velocity,
                self.config.shot_radius,
                self.config.shot_lifetime,
            );
            self.stats.shots_fired += 1;
        }
    }

    /// Returns true when an asteroid hit the player this frame
    fn check_player_hit(&mut self, telemetry: &mut dyn Telemetry) -> bool {
        let Some(index) = first_hit(&self.ctx.player, &self.ctx.asteroids) else {
            return false;
        };
        log::info!(
            "Player hit by asteroid {} at {}",
            self.ctx.asteroids[index].id,
            self.ctx.player.body.pos
        );
        telemetry.log_event(GameEvent::PlayerHit);
        self.ctx.player.kill();
        true
    }

    /// Asteroids outer, shots inner. Children are buffered during the scan
    /// and registered right after it, so they are live this frame but are
    /// not hit candidates until the next.
    fn resolve_shot_hits(&mut self, telemetry: &mut dyn Telemetry) -> Result<(), SimError> {
        let mut children = SpawnQueue::new();
        let rng = &mut self.rng;
        let config = &self.config;

        let scanned = resolve_pairs(
            &mut self.ctx.asteroids,
            &mut self.ctx.shots,
            |asteroid, shot| {
                telemetry.log_event(GameEvent::AsteroidShot);
                shot.kill();
                asteroid.split(&mut *rng, &mut children, &mut *telemetry, config)?;
                Ok::<(), SimError>(())
            },
        );
        // Register whatever was produced, even if a split failed midway
        children.flush_into(&mut self.ctx)?;
        let hits = scanned?;
        self.stats.asteroids_destroyed += hits as u64;
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let line_width = self.config.line_width;
        for entity in self.ctx.draw_order() {
            entity.draw(surface, line_width);
        }
    }
}
