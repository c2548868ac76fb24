//! Per-tick motion integration: velocity scaling, Euler step, trail
//! maintenance and boundary reflection
//!
//! One simulation tick is one rendered frame; there is no fixed-timestep
//! decoupling. Velocity is re-derived from the particle's base velocity every
//! tick, so temperature and friction changes never accumulate: setting
//! temperature back to its old value restores the old speeds exactly.

use crate::params::SimParams;
use crate::store::ParticleStore;
use reaction_physics::constants::TRAIL_FADE;
use reaction_physics::{Particle, TrailPoint};

/// Advance one particle by one tick.
pub fn integrate(p: &mut Particle, params: &SimParams, width: f32, height: f32) {
    // Scale from the spawn velocity, then apply air resistance.
    p.velocity = p.base_velocity * params.temperature;
    p.velocity *= 1.0 - params.friction;

    // Explicit Euler position update.
    p.position += p.velocity;

    // Record the new position, then trim to the speed-derived bound.
    p.trail.push_back(TrailPoint {
        position: p.position,
        alpha: 1.0,
    });
    let max_len = p.max_trail_len();
    while p.trail.len() > max_len {
        p.trail.pop_front();
    }

    // Fade everything, including the point appended this tick.
    for point in &mut p.trail {
        point.alpha *= TRAIL_FADE;
    }

    // Reflect off the chamber edges: clamp the position and flip the *base*
    // velocity component, so the bounce survives future rescaling.
    if p.position.x - p.size < 0.0 {
        p.position.x = p.size;
        p.base_velocity.x = -p.base_velocity.x;
    }
    if p.position.x + p.size > width {
        p.position.x = width - p.size;
        p.base_velocity.x = -p.base_velocity.x;
    }
    if p.position.y - p.size < 0.0 {
        p.position.y = p.size;
        p.base_velocity.y = -p.base_velocity.y;
    }
    if p.position.y + p.size > height {
        p.position.y = height - p.size;
        p.base_velocity.y = -p.base_velocity.y;
    }
}

/// Advance every particle in the store by one tick.
pub fn integrate_all(store: &mut ParticleStore, params: &SimParams, width: f32, height: f32) {
    for p in store.iter_mut() {
        integrate(p, params, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use reaction_physics::constants::{TRAIL_MAX, TRAIL_MIN};

    fn params(temperature: f32, friction: f32) -> SimParams {
        SimParams {
            temperature,
            friction,
        }
    }

    #[test]
    fn velocity_scaling_is_not_cumulative() {
        let mut p = Particle::new("H", Vec2::new(600.0, 400.0), Vec2::new(4.0, -2.0), 10.0).unwrap();
        for _ in 0..10 {
            integrate(&mut p, &params(0.25, 0.1), 1200.0, 800.0);
        }
        // Ten ticks at the same settings leave the scaled velocity at exactly
        // base * temperature * (1 - friction); nothing compounds.
        assert!((p.velocity.x - 4.0 * 0.25 * 0.9).abs() < 1e-6);
        assert!((p.velocity.y - -2.0 * 0.25 * 0.9).abs() < 1e-6);
        // Restoring old settings restores old speeds.
        integrate(&mut p, &params(1.0, 0.0), 1200.0, 800.0);
        assert_eq!(p.velocity, p.base_velocity);
    }

    #[test]
    fn position_moves_by_scaled_velocity() {
        let mut p = Particle::new("H", Vec2::new(100.0, 100.0), Vec2::new(6.0, 0.0), 10.0).unwrap();
        integrate(&mut p, &params(0.5, 0.0), 1200.0, 800.0);
        assert_eq!(p.position, Vec2::new(103.0, 100.0));
    }

    #[test]
    fn trail_stays_bounded_and_fades() {
        let mut p = Particle::new("H", Vec2::new(600.0, 400.0), Vec2::new(1.0, 0.0), 10.0).unwrap();
        for _ in 0..100 {
            integrate(&mut p, &params(1.0, 0.0), 1200.0, 800.0);
        }
        assert!(p.trail.len() >= TRAIL_MIN && p.trail.len() <= TRAIL_MAX);
        // speed 1.0 -> bound of 10 points
        assert_eq!(p.trail.len(), 10);

        // Alpha strictly increases from oldest to newest; every point decays
        // each tick while present.
        for pair in p.trail.iter().zip(p.trail.iter().skip(1)) {
            assert!(pair.0.alpha < pair.1.alpha);
        }
        let newest = p.trail.back().unwrap().alpha;
        assert!((newest - TRAIL_FADE).abs() < 1e-6);

        let alphas_before: Vec<f32> = p.trail.iter().map(|t| t.alpha).collect();
        integrate(&mut p, &params(1.0, 0.0), 1200.0, 800.0);
        // Oldest point was evicted; each surviving point faded once more.
        for (before, after) in alphas_before.iter().skip(1).zip(p.trail.iter()) {
            assert!((after.alpha - before * TRAIL_FADE).abs() < 1e-6);
        }
    }

    #[test]
    fn boundary_reflection_clamps_and_flips_base_velocity() {
        let mut p = Particle::new("H", Vec2::new(1195.0, 400.0), Vec2::new(6.0, 0.0), 10.0).unwrap();
        integrate(&mut p, &params(1.0, 0.0), 1200.0, 800.0);
        assert_eq!(p.position.x, 1190.0);
        assert_eq!(p.base_velocity.x, -6.0);
        // The scaled velocity for *this* tick is untouched; next tick it is
        // re-derived from the flipped base.
        assert_eq!(p.velocity.x, 6.0);
        integrate(&mut p, &params(1.0, 0.0), 1200.0, 800.0);
        assert_eq!(p.velocity.x, -6.0);
    }

    #[test]
    fn particles_stay_inside_the_chamber() {
        let mut store = ParticleStore::new(16);
        let starts = [
            (Vec2::new(5.0, 5.0), Vec2::new(-6.0, -6.0)),
            (Vec2::new(1195.0, 795.0), Vec2::new(6.0, 6.0)),
            (Vec2::new(600.0, 400.0), Vec2::new(4.0, -3.0)),
        ];
        for (pos, vel) in starts {
            store.append(Particle::new("H", pos, vel, 10.0).unwrap()).unwrap();
        }
        for _ in 0..500 {
            integrate_all(&mut store, &params(1.0, 0.0), 1200.0, 800.0);
            for p in store.particles() {
                assert!(p.position.x >= p.size && p.position.x <= 1200.0 - p.size);
                assert!(p.position.y >= p.size && p.position.y <= 800.0 - p.size);
            }
        }
    }
}
