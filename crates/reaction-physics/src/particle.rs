//! Particle record and trail history

use crate::constants::{TRAIL_MAX, TRAIL_MIN, TRAIL_SPEED_SCALE};
use glam::Vec2;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

/// Rejected particle construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticleError {
    #[error("invalid particle parameter: {0}")]
    InvalidParam(String),
}

/// One historical position sample on a particle's trail.
///
/// `alpha` starts at 1.0 when the sample is taken and is multiplied by
/// [`crate::constants::TRAIL_FADE`] every tick until the sample is evicted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub alpha: f32,
}

/// A simulated body: species name, kinematics, extent, appearance, reaction
/// state and trail history.
///
/// Velocity is stored twice on purpose. `base_velocity` is the velocity the
/// particle spawned with (or acquired from a scatter/reflection); every tick
/// the integrator re-derives `velocity` from it by scaling with temperature
/// and friction. Because the scaling always starts from the base value,
/// control changes never compound across ticks.
///
/// `size` doubles as the mass proxy in all conservation formulas and must
/// stay positive.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Species label; key into the reaction catalog.
    pub name: String,
    /// Position (x, y) in chamber coordinates.
    pub position: Vec2,
    /// Current (scaled) velocity.
    pub velocity: Vec2,
    /// Original spawn velocity that temperature/friction rescale each tick.
    pub base_velocity: Vec2,
    /// Radius; also the mass proxy. Invariant: `> 0`.
    pub size: f32,
    /// RGB color, each channel in [0, 1].
    pub color: [f32; 3],
    /// Set once the particle resulted from a combination. A merged particle
    /// cannot merge again (it still scatters).
    pub merged: bool,
    /// Tombstone set when the particle was consumed by a merge this tick;
    /// the store compacts tombstoned particles at the end of the pass.
    pub consumed: bool,
    /// Interval between decay steps; assigned only to oversized particles.
    pub decay_time: Option<Duration>,
    /// Sim-clock instant the next decay step is due; maintained by the
    /// scheduler. Travels with the particle so store compaction cannot
    /// detach a timer from its owner.
    pub next_decay: Option<Duration>,
    /// Historical position samples, oldest first.
    pub trail: VecDeque<TrailPoint>,
}

impl Particle {
    /// Create a particle of `name` at rest-state defaults: no decay timer,
    /// unmerged, empty trail.
    ///
    /// Size must be finite and positive (it divides conservation formulas as
    /// the mass proxy) and the kinematics must be finite; anything else is
    /// refused so no downstream math can produce NaN.
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        size: f32,
    ) -> Result<Self, ParticleError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ParticleError::InvalidParam(format!(
                "size must be finite and positive, got {size}"
            )));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(ParticleError::InvalidParam(
                "position and velocity must be finite".into(),
            ));
        }
        Ok(Self {
            name: name.into(),
            position,
            velocity,
            base_velocity: velocity,
            size,
            color: [1.0, 1.0, 1.0],
            merged: false,
            consumed: false,
            decay_time: None,
            next_decay: None,
            trail: VecDeque::new(),
        })
    }

    /// Current speed (magnitude of the scaled velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Trail length bound for the current speed: `clamp(speed * 10, 5, 50)`.
    #[inline]
    pub fn max_trail_len(&self) -> usize {
        (self.speed() * TRAIL_SPEED_SCALE).clamp(TRAIL_MIN as f32, TRAIL_MAX as f32) as usize
    }

    /// Whether this particle is currently subject to decay.
    #[inline]
    pub fn is_oversized(&self) -> bool {
        self.size >= crate::constants::DECAY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_nonpositive_or_nonfinite_parameters() {
        // A zero-size particle would zero the total mass in merge math and
        // turn the product's position into NaN; refuse it at construction.
        assert!(Particle::new("X", Vec2::ZERO, Vec2::ZERO, 0.0).is_err());
        assert!(Particle::new("X", Vec2::ZERO, Vec2::ZERO, -1.0).is_err());
        assert!(Particle::new("X", Vec2::ZERO, Vec2::ZERO, f32::NAN).is_err());
        assert!(Particle::new("X", Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO, 10.0).is_err());
        assert!(Particle::new("X", Vec2::ZERO, Vec2::new(0.0, f32::NAN), 10.0).is_err());

        let err = Particle::new("X", Vec2::ZERO, Vec2::ZERO, 0.0).unwrap_err();
        assert!(matches!(err, ParticleError::InvalidParam(_)));
    }

    #[test]
    fn trail_bound_clamps_to_range() {
        let mut p = Particle::new("H", Vec2::ZERO, Vec2::ZERO, 10.0).unwrap();
        assert_eq!(p.max_trail_len(), TRAIL_MIN);

        p.velocity = Vec2::new(100.0, 0.0);
        assert_eq!(p.max_trail_len(), TRAIL_MAX);

        p.velocity = Vec2::new(3.0, 0.0);
        assert_eq!(p.max_trail_len(), 30);
    }

    #[test]
    fn new_particle_starts_unmerged_with_base_velocity() {
        let v = Vec2::new(2.0, -3.0);
        let p = Particle::new("Fe", Vec2::new(10.0, 20.0), v, 35.0).unwrap();
        assert!(!p.merged);
        assert!(!p.consumed);
        assert_eq!(p.base_velocity, v);
        assert_eq!(p.velocity, v);
        assert!(p.trail.is_empty());
        assert!(p.decay_time.is_none());
    }

    #[test]
    fn oversized_threshold_is_inclusive() {
        let p = Particle::new("Bi", Vec2::ZERO, Vec2::ZERO, 92.0).unwrap();
        assert!(p.is_oversized());
        let p = Particle::new("Pb", Vec2::ZERO, Vec2::ZERO, 91.0).unwrap();
        assert!(!p.is_oversized());
    }
}
