//! Runtime parameters and fixed configuration

use crate::error::{Error, Result};
use reaction_physics::constants::{CHAMBER_HEIGHT, CHAMBER_WIDTH};

/// Per-tick control values owned by the driver (in the full application, by
/// the UI sliders). Passed into [`Simulation::step`](crate::Simulation::step)
/// every frame rather than living in ambient globals, so a driver can change
/// them at any tick and the effect is immediate and fully reversible.
///
/// The engine itself performs no range validation; the expected ranges are
/// `temperature ∈ [0, 1]` and `friction ∈ [0, 0.25]`, enforced by whatever
/// control surface produces the values. [`clamped`](Self::clamped) is offered
/// for drivers that want a guard anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Global velocity multiplier, re-applied to spawn velocities each tick.
    pub temperature: f32,
    /// Air-resistance factor; velocities scale by `1 - friction` each tick.
    pub friction: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            friction: 0.0,
        }
    }
}

impl SimParams {
    /// Copy with both values clamped to their documented ranges.
    pub fn clamped(self) -> Self {
        Self {
            temperature: self.temperature.clamp(0.0, 1.0),
            friction: self.friction.clamp(0.0, 0.25),
        }
    }
}

/// Fixed simulation configuration, validated once at construction.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Chamber width in world units.
    pub width: f32,
    /// Chamber height in world units.
    pub height: f32,
    /// Hard cap on the particle store; spawns past this are refused with
    /// [`Error::CapacityExceeded`] instead of growing without bound.
    pub max_particles: usize,
    /// RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: CHAMBER_WIDTH,
            height: CHAMBER_HEIGHT,
            max_particles: 4096,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidParam("width must be finite and > 0".into()));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidParam("height must be finite and > 0".into()));
        }
        if self.max_particles == 0 {
            return Err(Error::InvalidParam("max_particles must be > 0".into()));
        }
        Ok(())
    }
}
