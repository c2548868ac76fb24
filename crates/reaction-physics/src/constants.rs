//! Tuning constants for the reaction simulation
//!
//! These mirror the values the simulation was designed around; they are not
//! physical constants, just the numbers that make the chamber look right.

/// Chamber width in world units (one unit = one pixel at the render boundary).
pub const CHAMBER_WIDTH: f32 = 1200.0;

/// Chamber height in world units.
pub const CHAMBER_HEIGHT: f32 = 800.0;

/// Per-tick multiplier applied to every trail point's alpha.
pub const TRAIL_FADE: f32 = 0.95;

/// Lower bound on trail length, regardless of speed.
pub const TRAIL_MIN: usize = 5;

/// Upper bound on trail length, regardless of speed.
pub const TRAIL_MAX: usize = 50;

/// Trail length scales with speed: `clamp(speed * TRAIL_SPEED_SCALE, MIN, MAX)`.
pub const TRAIL_SPEED_SCALE: f32 = 10.0;

/// Ad-hoc energy loss subtracted from each scaled velocity component after an
/// elastic scatter.
pub const SCATTER_DRAG: f32 = 0.01;

/// Extra separation (beyond the overlap) applied when de-penetrating a pair.
pub const SEPARATION_MARGIN: f32 = 1.0;

/// Particles at or above this size are considered oversized and decay.
pub const DECAY_THRESHOLD: f32 = 92.0;

/// Size lost per timed decay step. Happens to equal the second element
/// catalog entry's mass (He).
pub const DECAY_STEP: f32 = 11.0;

/// Size lost per global shrink pass.
pub const SHRINK_STEP: f32 = 10.0;

/// Seconds between global shrink-and-replenish passes.
pub const SHRINK_INTERVAL_SECS: u64 = 5;

/// Inclusive range (seconds) for a decaying particle's per-step interval.
pub const DECAY_TIME_RANGE_SECS: (u64, u64) = (1, 11);

/// Initial velocity components are sampled uniformly from
/// `[-SPAWN_SPEED_RANGE, SPAWN_SPEED_RANGE]`.
pub const SPAWN_SPEED_RANGE: f32 = 6.0;
