//! The shared particle collection
//!
//! Append-mostly: the integrator and resolver mutate particles in place, the
//! resolver appends merge products, and consumed reactants are tombstoned and
//! compacted once per tick. All mutation happens on the simulation thread
//! (single-writer discipline); the render boundary only ever sees copies via
//! [`crate::Snapshot`].

use crate::error::{Error, Result};
use glam::Vec2;
use rand::Rng;
use reaction_physics::constants::{DECAY_TIME_RANGE_SECS, SPAWN_SPEED_RANGE};
use reaction_physics::{collision, Particle};
use std::time::Duration;

/// Attempt budget for rejection-sampling a non-overlapping spawn position.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Mutable, capacity-capped collection of live particles.
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticleStore {
    /// Create an empty store with a hard particle cap.
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only view of the live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    /// Distinct mutable references to the pair `(i, j)`, `i < j`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Particle, &mut Particle) {
        debug_assert!(i < j && j < self.particles.len());
        let (head, tail) = self.particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }

    /// Append a particle, refusing once the cap is reached.
    pub fn append(&mut self, particle: Particle) -> Result<()> {
        if self.particles.len() >= self.max_particles {
            return Err(Error::CapacityExceeded {
                limit: self.max_particles,
            });
        }
        self.particles.push(particle);
        Ok(())
    }

    /// Drop tombstoned particles; returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.consumed);
        before - self.particles.len()
    }

    /// Whether a particle of `size` at `position` would overlap any live
    /// particle.
    pub fn overlaps_any(&self, position: Vec2, size: f32) -> bool {
        self.particles
            .iter()
            .any(|p| collision::overlaps_at(position, size, p))
    }

    /// Rejection-sample a position inside `width x height` at which a
    /// particle of `size` would not overlap anything, within a bounded
    /// attempt budget.
    pub fn place_non_overlapping(
        &self,
        rng: &mut impl Rng,
        width: f32,
        height: f32,
        size: f32,
    ) -> Result<Vec2> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
            if !self.overlaps_any(candidate, size) {
                return Ok(candidate);
            }
        }
        Err(Error::PlacementFailed(format!(
            "no free position for size {size} after {MAX_PLACEMENT_ATTEMPTS} attempts"
        )))
    }

    /// Spawn one particle of species `name`: rejection-sampled position,
    /// velocity components uniform in `[-6, 6]`, random color, and a decay
    /// timer if the species is oversized.
    pub fn spawn(
        &mut self,
        rng: &mut impl Rng,
        name: &str,
        size: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let position = self.place_non_overlapping(rng, width, height, size)?;
        let velocity = Vec2::new(
            rng.random_range(-SPAWN_SPEED_RANGE..=SPAWN_SPEED_RANGE),
            rng.random_range(-SPAWN_SPEED_RANGE..=SPAWN_SPEED_RANGE),
        );

        let mut particle = Particle::new(name, position, velocity, size)?;
        particle.color = [rng.random(), rng.random(), rng.random()];
        if particle.is_oversized() {
            let secs = rng.random_range(DECAY_TIME_RANGE_SECS.0..=DECAY_TIME_RANGE_SECS.1);
            particle.decay_time = Some(Duration::from_secs(secs));
        }
        self.append(particle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(x: f32, y: f32, size: f32) -> Particle {
        Particle::new("H", Vec2::new(x, y), Vec2::ZERO, size).unwrap()
    }

    #[test]
    fn append_respects_capacity() {
        let mut store = ParticleStore::new(2);
        store.append(particle_at(10.0, 10.0, 10.0)).unwrap();
        store.append(particle_at(50.0, 50.0, 10.0)).unwrap();
        let err = store.append(particle_at(90.0, 90.0, 10.0)).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { limit: 2 }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn compact_drops_only_tombstones() {
        let mut store = ParticleStore::new(8);
        store.append(particle_at(10.0, 10.0, 5.0)).unwrap();
        store.append(particle_at(50.0, 50.0, 5.0)).unwrap();
        store.append(particle_at(90.0, 90.0, 5.0)).unwrap();

        store.iter_mut().nth(1).unwrap().consumed = true;
        assert_eq!(store.compact(), 1);
        assert_eq!(store.len(), 2);
        assert!(store.particles().iter().all(|p| !p.consumed));
        assert_eq!(store.particles()[1].position, Vec2::new(90.0, 90.0));
    }

    #[test]
    fn placement_avoids_existing_particles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::new(8);
        store.append(particle_at(100.0, 100.0, 50.0)).unwrap();

        for _ in 0..20 {
            let pos = store.place_non_overlapping(&mut rng, 200.0, 200.0, 20.0).unwrap();
            assert!(!store.overlaps_any(pos, 20.0));
        }
    }

    #[test]
    fn placement_fails_when_chamber_is_saturated() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::new(8);
        // One particle whose radius covers the whole chamber.
        store.append(particle_at(50.0, 50.0, 500.0)).unwrap();
        let err = store
            .place_non_overlapping(&mut rng, 100.0, 100.0, 10.0)
            .unwrap_err();
        assert!(matches!(err, Error::PlacementFailed(_)));
    }

    #[test]
    fn spawn_refuses_invalid_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = ParticleStore::new(8);
        let err = store.spawn(&mut rng, "X", 0.0, 400.0, 400.0).unwrap_err();
        assert!(matches!(err, Error::Particle(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn spawn_assigns_decay_timer_only_when_oversized() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = ParticleStore::new(8);
        store.spawn(&mut rng, "H", 10.0, 400.0, 400.0).unwrap();
        store.spawn(&mut rng, "U", 103.0, 400.0, 400.0).unwrap();

        let h = &store.particles()[0];
        assert!(h.decay_time.is_none());
        assert!(h.base_velocity.x.abs() <= 6.0 && h.base_velocity.y.abs() <= 6.0);

        let u = &store.particles()[1];
        assert_eq!(u.name, "U");
        let secs = u.decay_time.unwrap().as_secs();
        assert!((1..=11).contains(&secs));
    }

    #[test]
    fn pair_mut_returns_distinct_references() {
        let mut store = ParticleStore::new(4);
        store.append(particle_at(10.0, 10.0, 5.0)).unwrap();
        store.append(particle_at(50.0, 50.0, 5.0)).unwrap();
        let (a, b) = store.pair_mut(0, 1);
        a.size = 7.0;
        b.size = 9.0;
        assert_eq!(store.particles()[0].size, 7.0);
        assert_eq!(store.particles()[1].size, 9.0);
    }
}
