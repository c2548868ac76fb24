//! Pairwise collision math: merge, elastic scatter, de-penetration
//!
//! These are pure functions over particle pairs; the per-tick pair scan that
//! drives them lives in `reaction-simulation`. Size stands in for mass
//! throughout, and size squared is the conserved quantity when two particles
//! combine.

use crate::constants::{SCATTER_DRAG, SEPARATION_MARGIN};
use crate::particle::{Particle, TrailPoint};
use glam::Vec2;
use std::collections::VecDeque;

/// Squared-distance floor below which a pair counts as coincident. Scatter
/// and separation divide by the center distance, so coincident pairs skip
/// both for the tick instead of producing NaN.
const DEGENERATE_DIST_SQ: f32 = 1e-12;

/// Species allowed to keep merging after having been produced by a merge.
const CARRIER_SPECIES: [&str; 2] = ["H2", "O2"];

/// Whether a reactant name marks the merge product as perpetually reactive.
#[inline]
pub fn is_carrier(name: &str) -> bool {
    CARRIER_SPECIES.contains(&name)
}

/// Minimum center distance at which two particles are just touching.
#[inline]
pub fn min_separation(a: &Particle, b: &Particle) -> f32 {
    a.size + b.size
}

/// Overlap test on squared distances.
#[inline]
pub fn overlapping(a: &Particle, b: &Particle) -> bool {
    overlaps_at(a.position, a.size, b)
}

/// Overlap test for a hypothetical particle of `size` at `position`, used
/// when probing spawn locations.
#[inline]
pub fn overlaps_at(position: Vec2, size: f32, p: &Particle) -> bool {
    let min_dist = size + p.size;
    position.distance_squared(p.position) < min_dist * min_dist
}

/// Whether the pair is too close for normal/reflection math to be valid.
#[inline]
pub fn degenerate(a: &Particle, b: &Particle) -> bool {
    a.position.distance_squared(b.position) < DEGENERATE_DIST_SQ
}

/// Combine two particles into the catalog product `product`.
///
/// Conservation laws, with size as the mass proxy:
/// - position and velocity are mass-weighted averages (momentum conserved),
/// - the new size is the quadrature combination `sqrt(a² + b²)`, treating
///   size squared as the conserved quantity,
/// - color is the elementwise average.
///
/// The product is marked `merged` unless either reactant is a carrier
/// species (`H2`/`O2`), which may keep reacting. The product's trail is
/// seeded with a single "energy flash" point at the *sum* of the former
/// positions, at alpha 2.0.
pub fn merge(a: &Particle, b: &Particle, product: &str) -> Particle {
    let total_mass = a.size + b.size;

    let position = (a.position * a.size + b.position * b.size) / total_mass;
    let velocity = (a.velocity * a.size + b.velocity * b.size) / total_mass;
    let size = (a.size * a.size + b.size * b.size).sqrt();

    // Valid reactants (finite kinematics, positive sizes) always yield a
    // valid product, so the construction invariants hold here by direct
    // assembly.
    let mut merged = Particle {
        name: product.to_string(),
        position,
        velocity,
        base_velocity: velocity,
        size,
        color: [
            (a.color[0] + b.color[0]) / 2.0,
            (a.color[1] + b.color[1]) / 2.0,
            (a.color[2] + b.color[2]) / 2.0,
        ],
        merged: !(is_carrier(&a.name) || is_carrier(&b.name)),
        consumed: false,
        decay_time: None,
        next_decay: None,
        trail: VecDeque::new(),
    };
    merged.trail.push_back(TrailPoint {
        position: a.position + b.position,
        alpha: 2.0,
    });
    merged
}

/// Impulse-based elastic collision along the line of centers.
///
/// The reflected impulse is applied to each particle's *base* velocity, so it
/// survives future temperature/friction rescaling the same way a wall bounce
/// does. A constant drag is then subtracted from each *scaled* velocity
/// component as an ad-hoc energy loss. Coincident pairs are skipped.
pub fn scatter(a: &mut Particle, b: &mut Particle) {
    if degenerate(a, b) {
        log::debug!("skipping scatter for coincident pair {} / {}", a.name, b.name);
        return;
    }

    let separation = a.position - b.position;
    let dist_sq = separation.length_squared();
    let total_mass = a.size + b.size;

    // Both projections come from the same pre-collision snapshot. The
    // relative velocity flips sign with the separation, so the projected
    // scalar is identical for the two particles.
    let projected = (a.velocity - b.velocity).dot(separation) / dist_sq;

    a.base_velocity -= (2.0 * b.size / total_mass) * projected * separation;
    b.base_velocity -= (2.0 * a.size / total_mass) * projected * -separation;

    a.velocity -= Vec2::splat(SCATTER_DRAG);
    b.velocity -= Vec2::splat(SCATTER_DRAG);
}

/// Push an overlapping pair apart along the normalized separation vector by
/// half the overlap plus a fixed margin. Coincident pairs are skipped.
pub fn separate(a: &mut Particle, b: &mut Particle) {
    if degenerate(a, b) {
        return;
    }

    let delta = b.position - a.position;
    let dist = delta.length();
    let overlap = 0.5 * (min_separation(a, b) - dist + SEPARATION_MARGIN);
    let normal = delta / dist;

    a.position -= normal * overlap;
    b.position += normal * overlap;
}
