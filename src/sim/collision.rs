//! Circle collision tests between entity sets
//!
//! Overlap is strict: two circles whose centres are exactly `r1 + r2` apart
//! are touching, not colliding. Distances are compared squared.

use glam::Vec2;

use super::entity::Entity;

/// True iff the open discs overlap
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

/// Index of the first live entity in `set` that collides with `target`
pub fn first_hit<E: Entity>(target: &dyn Entity, set: &[E]) -> Option<usize> {
    if !target.is_alive() {
        return None;
    }
    set.iter()
        .position(|e| e.is_alive() && e.collides_with(target))
}

/// Resolve destructive collisions between two sets, `outer` by `inner`.
///
/// `on_hit` runs for each colliding live pair and is expected to kill one or
/// both participants. Liveness is rechecked before every pairing, so an entity
/// killed earlier in the scan is never paired again.
pub fn resolve_pairs<A, B, E>(
    outer: &mut [A],
    inner: &mut [B],
    mut on_hit: impl FnMut(&mut A, &mut B) -> Result<(), E>,
) -> Result<usize, E>
where
    A: Entity,
    B: Entity,
{
    let mut hits = 0;
    for a in outer.iter_mut() {
        for b in inner.iter_mut() {
            if !a.is_alive() {
                break;
            }
            if !b.is_alive() || !a.collides_with(&*b) {
                continue;
            }
            on_hit(a, b)?;
            hits += 1;
        }
    }
    Ok(hits)
}
