//! Decay and replenish timers
//!
//! Oversized particles lose mass in two ways: a per-particle decay timer
//! (interval drawn at spawn) and a global shrink pass every five seconds
//! that also spawns one fundamental particle per shrink to replenish the
//! population. Both run cooperatively off the simulation clock passed into
//! [`DecayScheduler::advance`], so a tick drives every timer that has come
//! due and tests can move time synthetically.

use crate::store::ParticleStore;
use rand::Rng;
use reaction_physics::catalog::FUNDAMENTALS;
use reaction_physics::constants::{
    DECAY_STEP, DECAY_THRESHOLD, SHRINK_INTERVAL_SECS, SHRINK_STEP,
};
use std::time::Duration;

/// Counters from one timer pass, for driver logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayStats {
    /// Per-particle decay steps applied.
    pub decay_steps: usize,
    /// Particles shrunk by the global interval.
    pub shrunk: usize,
    /// Fundamental particles spawned to replenish.
    pub spawned: usize,
}

/// Interval scheduler for decay and shrink/replenish.
#[derive(Debug)]
pub struct DecayScheduler {
    next_shrink: Duration,
}

impl DecayScheduler {
    pub fn new() -> Self {
        Self {
            next_shrink: Duration::from_secs(SHRINK_INTERVAL_SECS),
        }
    }

    /// Fire every timer due at `now`.
    ///
    /// Per-particle decay: a particle steps down by [`DECAY_STEP`] once per
    /// elapsed interval, but only while the step would keep it at or above
    /// [`DECAY_THRESHOLD`]; the first blocked step cancels the timer for
    /// good. A missed stretch of sim-time fires all overdue steps at once.
    ///
    /// Global shrink: every [`SHRINK_INTERVAL_SECS`], each oversized particle
    /// loses [`SHRINK_STEP`] and one randomly-typed fundamental is spawned
    /// per shrink. A full store downgrades the spawn to a warning.
    pub fn advance(
        &mut self,
        store: &mut ParticleStore,
        rng: &mut impl Rng,
        width: f32,
        height: f32,
        now: Duration,
    ) -> DecayStats {
        let mut stats = DecayStats::default();

        for p in store.iter_mut() {
            let Some(interval) = p.decay_time else {
                continue;
            };
            let mut due = p.next_decay.unwrap_or(now + interval);
            let mut cancelled = false;
            while now >= due {
                if p.size - DECAY_STEP >= DECAY_THRESHOLD {
                    p.size -= DECAY_STEP;
                    stats.decay_steps += 1;
                    due += interval;
                } else {
                    cancelled = true;
                    break;
                }
            }
            if cancelled {
                log::debug!("decay finished for {} at size {}", p.name, p.size);
                p.decay_time = None;
                p.next_decay = None;
            } else {
                p.next_decay = Some(due);
            }
        }

        while now >= self.next_shrink {
            self.next_shrink += Duration::from_secs(SHRINK_INTERVAL_SECS);

            let mut shrunk = 0;
            for p in store.iter_mut() {
                if p.size >= DECAY_THRESHOLD {
                    p.size -= SHRINK_STEP;
                    shrunk += 1;
                }
            }
            stats.shrunk += shrunk;

            for _ in 0..shrunk {
                let (name, size) = FUNDAMENTALS[rng.random_range(0..FUNDAMENTALS.len())];
                match store.spawn(rng, name, size, width, height) {
                    Ok(()) => stats.spawned += 1,
                    Err(e) => log::warn!("skipping replenish spawn: {e}"),
                }
            }
        }

        stats
    }
}

impl Default for DecayScheduler {
    fn default() -> Self {
        Self::new()
    }
}
