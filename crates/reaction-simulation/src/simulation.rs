//! The simulation driver
//!
//! [`Simulation`] owns all mutable state (store, catalog, timers, RNG) and
//! advances it from a single thread. One [`Simulation::step`] runs the
//! per-tick phases in a fixed order: motion integration for every particle,
//! then the collision pass, then the decay/spawn timers. Readers get state
//! through [`Snapshot`], never through shared mutation.

use crate::collide::{self, CollisionStats};
use crate::decay::{DecayScheduler, DecayStats};
use crate::error::Result;
use crate::motion;
use crate::params::{SimConfig, SimParams};
use crate::snapshot::Snapshot;
use crate::store::ParticleStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reaction_physics::{Mode, Particle, ReactionCatalog};
use std::time::Duration;

/// Counters from one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickStats {
    pub collisions: CollisionStats,
    pub decay: DecayStats,
}

pub struct Simulation {
    store: ParticleStore,
    catalog: ReactionCatalog,
    scheduler: DecayScheduler,
    rng: StdRng,
    config: SimConfig,
    tick: u64,
}

impl Simulation {
    /// Build a simulation and spawn `count` particles of random species from
    /// the mode's table.
    pub fn new(mode: Mode, count: usize, config: SimConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };

        let mut store = ParticleStore::new(config.max_particles);
        let species = mode.species();
        for _ in 0..count {
            let (name, size) = species[rng.random_range(0..species.len())];
            store.spawn(&mut rng, name, size, config.width, config.height)?;
        }
        log::info!("spawned {} particles in {mode:?} mode", store.len());

        Ok(Self {
            store,
            catalog: ReactionCatalog::standard(),
            scheduler: DecayScheduler::new(),
            rng,
            config,
            tick: 0,
        })
    }

    /// Advance one tick. `now` is the elapsed sim-clock driving the decay
    /// and replenish timers; `params` are clamped to their valid ranges
    /// before use.
    pub fn step(&mut self, params: &SimParams, now: Duration) -> TickStats {
        let params = params.clamped();

        motion::integrate_all(&mut self.store, &params, self.config.width, self.config.height);
        let collisions = collide::resolve_all(&mut self.store, &self.catalog);
        let decay = self.scheduler.advance(
            &mut self.store,
            &mut self.rng,
            self.config.width,
            self.config.height,
            now,
        );

        self.tick += 1;
        TickStats { collisions, decay }
    }

    /// Copy the current population for the render boundary.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.store, self.tick)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.particles()
    }
}
