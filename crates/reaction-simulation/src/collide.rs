//! Per-tick collision resolution: all-pairs scan, merge-or-scatter dispatch,
//! de-penetration
//!
//! The scan visits every unordered pair `(i, j)`, `i < j`, exactly once per
//! tick. Merge products are appended at the tail of the store mid-pass and
//! are therefore still visited by this same pass; consumed reactants are
//! tombstoned immediately (so they cannot react twice in one tick) and
//! compacted after the pass.

use crate::store::ParticleStore;
use reaction_physics::{collision, ReactionCatalog};

/// Counters from one collision pass, for driver logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Reactions performed (one product appended each).
    pub merges: usize,
    /// Elastic scatters performed.
    pub scatters: usize,
    /// Consumed reactants compacted away at the end of the pass.
    pub removed: usize,
}

/// Run one full collision pass over the store.
pub fn resolve_all(store: &mut ParticleStore, catalog: &ReactionCatalog) -> CollisionStats {
    let mut stats = CollisionStats::default();

    // Indexed loops on purpose: the store may grow while the pass runs.
    let mut i = 0;
    while i < store.len() {
        let mut j = i + 1;
        while j < store.len() {
            resolve_pair(store, catalog, i, j, &mut stats);
            j += 1;
        }
        i += 1;
    }

    stats.removed = store.compact();
    stats
}

/// Resolve a single overlapping pair: merge if the catalog defines a product
/// and neither participant has already merged, otherwise scatter; then push
/// the pair apart.
fn resolve_pair(
    store: &mut ParticleStore,
    catalog: &ReactionCatalog,
    i: usize,
    j: usize,
    stats: &mut CollisionStats,
) {
    let product = {
        let particles = store.particles();
        let (a, b) = (&particles[i], &particles[j]);
        if a.consumed || b.consumed || !collision::overlapping(a, b) {
            return;
        }
        if !a.merged && !b.merged {
            catalog.lookup(&a.name, &b.name)
        } else {
            None
        }
    };

    match product {
        Some(product) => {
            let merged = {
                let particles = store.particles();
                collision::merge(&particles[i], &particles[j], product)
            };
            log::debug!(
                "reaction: {} + {} -> {}",
                store.particles()[i].name,
                store.particles()[j].name,
                product
            );
            match store.append(merged) {
                Ok(()) => {
                    let (a, b) = store.pair_mut(i, j);
                    a.consumed = true;
                    b.consumed = true;
                    stats.merges += 1;
                }
                Err(e) => {
                    // No room for the product: leave the reactants live and
                    // treat the contact as an ordinary bounce.
                    log::warn!("dropping reaction product {product}: {e}");
                    let (a, b) = store.pair_mut(i, j);
                    collision::scatter(a, b);
                    stats.scatters += 1;
                }
            }
        }
        None => {
            let (a, b) = store.pair_mut(i, j);
            collision::scatter(a, b);
            stats.scatters += 1;
        }
    }

    let (a, b) = store.pair_mut(i, j);
    collision::separate(a, b);
}
