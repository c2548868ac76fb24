//! Read-only copies of simulation state for the render boundary
//!
//! The simulation thread is the only writer of the particle store; anything
//! downstream (a renderer, a recorder, a debug dump) works from a
//! [`Snapshot`] captured between ticks. The per-particle payload is split
//! into plain-old-data structs so a GPU frontend can upload them verbatim.

use crate::store::ParticleStore;
use bytemuck::{Pod, Zeroable};
use reaction_physics::Particle;

/// Per-particle instance data in upload-ready layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub _padding: f32,
    pub color: [f32; 3],
    pub merged: f32,
}

/// One trail sample in upload-ready layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 2],
    pub alpha: f32,
    pub _padding: f32,
}

/// Copy of one particle: identity plus upload-ready geometry.
#[derive(Debug, Clone)]
pub struct ParticleView {
    pub name: String,
    pub instance: ParticleInstance,
    pub trail: Vec<TrailVertex>,
}

impl ParticleView {
    fn capture(p: &Particle) -> Self {
        Self {
            name: p.name.clone(),
            instance: ParticleInstance {
                position: p.position.to_array(),
                size: p.size,
                _padding: 0.0,
                color: p.color,
                merged: if p.merged { 1.0 } else { 0.0 },
            },
            trail: p
                .trail
                .iter()
                .map(|t| TrailVertex {
                    position: t.position.to_array(),
                    alpha: t.alpha,
                    _padding: 0.0,
                })
                .collect(),
        }
    }
}

/// Immutable copy of the population at one tick.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tick: u64,
    pub particles: Vec<ParticleView>,
}

impl Snapshot {
    pub fn capture(store: &ParticleStore, tick: u64) -> Self {
        Self {
            tick,
            particles: store.particles().iter().map(ParticleView::capture).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
