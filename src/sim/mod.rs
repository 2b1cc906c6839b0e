//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Single-threaded, one synchronous pass per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order, which is ID order)
//! - Rendering, input and timing only through `platform` traits

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod field;
pub mod player;
pub mod shot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, child_radius, tier};
pub use collision::{circles_overlap, first_hit, resolve_pairs};
pub use entity::{Body, Entity, EntityId};
pub use field::{AsteroidField, Edge};
pub use player::{Player, ShotSpawn};
pub use shot::Shot;
pub use spawn::{AsteroidSpawn, SpawnQueue, Spawner};
pub use state::{GamePhase, SimulationContext};
pub use tick::{Session, SessionEnd, SessionStats};
